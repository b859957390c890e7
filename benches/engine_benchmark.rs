/// Criterion benchmark suite
///
/// Covers:
///   - Single-qubit gate throughput (H, X across an n-qubit register)
///   - Sparse vs dense inputs (zero-amplitude skipping)
///   - Probability extraction
///   - Interpreter pipeline (parse → dispatch → probabilities)
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_engine::core::{gates, probability, StateVector};
use qsim_engine::run_circuit;

const MAX_QUBITS: usize = 24;

fn uniform(n: usize) -> StateVector {
    let mut state = StateVector::new(n, MAX_QUBITS).unwrap();
    for q in 0..n {
        state = gates::hadamard(&state, q).unwrap();
    }
    state
}

// ── Single-qubit gate throughput ──────────────────────────────────────────

fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");
    for n in [4usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("H", n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n, MAX_QUBITS).unwrap();
                for q in 0..n {
                    state = gates::hadamard(&state, black_box(q)).unwrap();
                }
                state
            });
        });
        group.bench_with_input(BenchmarkId::new("X", n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n, MAX_QUBITS).unwrap();
                for q in 0..n {
                    state = gates::pauli_x(&state, black_box(q)).unwrap();
                }
                state
            });
        });
    }
    group.finish();
}

// ── Sparse vs dense input ─────────────────────────────────────────────────

fn bench_sparse_vs_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("h_on_16qubits");
    let basis = StateVector::new(16, MAX_QUBITS).unwrap();
    let dense = uniform(16);
    group.bench_function("basis_state", |b| {
        b.iter(|| gates::hadamard(black_box(&basis), 7).unwrap())
    });
    group.bench_function("uniform_state", |b| {
        b.iter(|| gates::hadamard(black_box(&dense), 7).unwrap())
    });
    group.finish();
}

// ── Probability extraction ────────────────────────────────────────────────

fn bench_probabilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("probabilities");
    for n in [8usize, 12, 16] {
        let state = uniform(n);
        group.bench_with_input(BenchmarkId::new("n", n), &state, |b, state| {
            b.iter(|| probability::probabilities(black_box(state)))
        });
    }
    group.finish();
}

// ── Interpreter pipeline ──────────────────────────────────────────────────

fn bench_interpreter(c: &mut Criterion) {
    let lines: Vec<String> = std::iter::once("init 10".to_string())
        .chain((0..10).map(|q| format!("h {q}")))
        .chain((0..10).map(|q| format!("x {q}")))
        .collect();
    c.bench_function("interpret_10qubits_20gates", |b| {
        b.iter(|| run_circuit(black_box(&lines)).unwrap())
    });
}

// ── Groups ────────────────────────────────────────────────────────────────

criterion_group!(gate_benches, bench_single_qubit_gates, bench_sparse_vs_dense);
criterion_group!(pipeline_benches, bench_probabilities, bench_interpreter);

criterion_main!(gate_benches, pipeline_benches);
