/// Single-qubit gate definitions and application logic.
///
/// Gates are 2×2 complex unitary matrices, row-major: `matrix[row][col]`.
///
/// Application strategy: walk all 2^n basis states, pair each one with the
/// partner that differs only in the target qubit, and accumulate the matrix
/// column for that input into a fresh zeroed output. O(2^n) per gate; the
/// input vector is only read.
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use super::state::StateVector;
use crate::error::{EngineError, Result};

pub type Matrix2x2 = [[Complex64; 2]; 2];

// ── Standard Gate Matrices ─────────────────────────────────────────────────

/// Hadamard gate, creates superposition from a basis state.
/// H = (1/√2) * [[1, 1], [1, -1]]
pub fn hadamard_matrix() -> Matrix2x2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// Pauli-X gate (quantum NOT), flips |0⟩ ↔ |1⟩.
/// X = [[0, 1], [1, 0]]
pub fn pauli_x_matrix() -> Matrix2x2 {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    [[zero, one], [one, zero]]
}

// ── Gate Application ───────────────────────────────────────────────────────

/// Apply a single-qubit gate to `target` and return the resulting state.
///
/// For each input index `j` with a nonzero amplitude and `b` the value of the
/// target bit in `j`, column `b` of `gate` is accumulated into `j` and its
/// partner `j ^ (1 << target)`:
///
/// - `b == 0`: `out[j] += M[0][0]·a`, `out[partner] += M[1][0]·a`
/// - `b == 1`: `out[partner] += M[0][1]·a`, `out[j] += M[1][1]·a`
pub fn apply_single_qubit_gate(
    state: &StateVector,
    gate: &Matrix2x2,
    target: usize,
) -> Result<StateVector> {
    if target >= state.num_qubits() {
        return Err(EngineError::index_out_of_range(
            target as i64,
            state.num_qubits(),
        ));
    }

    let mask = 1usize << target;
    let mut out = state.zeroed_like();
    let acc = out.amplitudes_mut();

    for (j, &amp) in state.amplitudes().iter().enumerate() {
        // Zero inputs contribute nothing.
        if amp.re == 0.0 && amp.im == 0.0 {
            continue;
        }
        let partner = j ^ mask;
        if StateVector::qubit_bit(j, target) {
            acc[partner] += gate[0][1] * amp;
            acc[j] += gate[1][1] * amp;
        } else {
            acc[j] += gate[0][0] * amp;
            acc[partner] += gate[1][0] * amp;
        }
    }

    Ok(out)
}

/// Hadamard on `target`.
pub fn hadamard(state: &StateVector, target: usize) -> Result<StateVector> {
    apply_single_qubit_gate(state, &hadamard_matrix(), target)
}

/// Pauli-X on `target`, through the generic pairing. The diagonal of X is
/// zero, so the self terms add nothing and each amplitude ends up on its
/// partner.
pub fn pauli_x(state: &StateVector, target: usize) -> Result<StateVector> {
    apply_single_qubit_gate(state, &pauli_x_matrix(), target)
}
