/// Circuit interpreter: maps parsed statements onto the state vector.
///
/// Execution model:
///   1. A fresh session starts with the default register: 1 qubit in |0⟩.
///   2. Statements run in source order. `init` replaces the register, each
///      gate replaces the state with the gate's output.
///   3. After the last statement the probability distribution is extracted
///      from the final state.
///
/// The interpreter holds only its configuration. Every `run` owns its own
/// session, so one `Interpreter` can be reused for any number of circuits.
use num_complex::Complex64;
use tracing::{debug, info, info_span, warn};

use crate::compiler::command::{Command, Operand, Statement};
use crate::compiler::parser;
use crate::config::{EngineConfig, OperandPolicy};
use crate::core::{gates, probability, StateVector};
use crate::error::{Diagnostic, DiagnosticKind, EngineError, Result};

/// Register size used by a fresh session and by the malformed-`init`
/// fallback.
pub const DEFAULT_QUBITS: usize = 1;

// ── Result type ───────────────────────────────────────────────────────────

/// Engine output for one circuit.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub num_qubits: usize,
    /// Final state, 2^num_qubits amplitudes.
    pub amplitudes: Vec<Complex64>,
    /// |amplitude|² per basis state, same length as `amplitudes`.
    pub probabilities: Vec<f64>,
    /// Malformed operands the interpreter recovered from, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Gates actually applied.
    pub gate_count: usize,
}

impl Outcome {
    /// True if no malformed operand was met.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

// ── Session ───────────────────────────────────────────────────────────────

/// Register owned by a single interpretation.
struct Session {
    state: StateVector,
    gate_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Session {
    fn new(max_qubits: usize) -> Result<Self> {
        Ok(Self {
            state: StateVector::new(DEFAULT_QUBITS, max_qubits)?,
            gate_count: 0,
            diagnostics: Vec::new(),
        })
    }

    fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    fn record(&mut self, kind: DiagnosticKind, stmt: &Statement, operand: &Operand) {
        let diagnostic = Diagnostic {
            kind,
            line: stmt.line,
            keyword: stmt.command.mnemonic().to_string(),
            operand: operand.text(),
        };
        warn!(line = stmt.line, "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(self) -> Outcome {
        let probabilities = probability::probabilities(&self.state);
        Outcome {
            num_qubits: self.state.num_qubits(),
            amplitudes: self.state.into_amplitudes(),
            probabilities,
            diagnostics: self.diagnostics,
            gate_count: self.gate_count,
        }
    }
}

// ── Interpreter ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: EngineConfig,
}

impl Interpreter {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse and interpret an ordered sequence of command lines.
    pub fn run<I, S>(&self, lines: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.execute(&parser::parse(lines))
    }

    /// Interpret already-parsed statements on a fresh session.
    pub fn execute(&self, statements: &[Statement]) -> Result<Outcome> {
        let gate_statements = statements.iter().filter(|s| s.command.is_gate()).count();
        let _span = info_span!(
            "interpret",
            statements = statements.len(),
            gates = gate_statements
        )
        .entered();
        let mut session = Session::new(self.config.max_qubits)?;

        for stmt in statements {
            debug!(line = stmt.line, command = %stmt.command, "interpreting");

            match &stmt.command {
                Command::Init(operand) => {
                    let n = self.register_size(stmt, operand, &mut session)?;
                    session.state = StateVector::new(n, self.config.max_qubits)?;
                }
                Command::Hadamard(operand) => {
                    if let Some(q) = self.target_qubit(stmt, operand, &mut session)? {
                        session.state = gates::hadamard(&session.state, q)?;
                        session.gate_count += 1;
                    }
                }
                Command::PauliX(operand) => {
                    if let Some(q) = self.target_qubit(stmt, operand, &mut session)? {
                        session.state = gates::pauli_x(&session.state, q)?;
                        session.gate_count += 1;
                    }
                }
                Command::Unrecognized(keyword) => {
                    debug!(line = stmt.line, %keyword, "ignoring unrecognized command");
                }
            }
        }

        let outcome = session.finish();
        info!(
            num_qubits = outcome.num_qubits,
            gates = outcome.gate_count,
            diagnostics = outcome.diagnostics.len(),
            "circuit complete"
        );
        Ok(outcome)
    }

    /// Resolve an `init` operand to a register size.
    fn register_size(&self, stmt: &Statement, operand: &Operand, session: &mut Session) -> Result<usize> {
        match operand.as_int() {
            Some(k) if k <= 0 => Err(EngineError::InvalidRegisterSize { requested: k }),
            Some(k) => Ok(usize::try_from(k).unwrap_or(usize::MAX)),
            None => match self.config.on_malformed_init {
                OperandPolicy::Recover => {
                    session.record(DiagnosticKind::DefaultedMalformedInit, stmt, operand);
                    Ok(DEFAULT_QUBITS)
                }
                OperandPolicy::Reject => Err(EngineError::MalformedInit {
                    line: stmt.line,
                    operand: operand.text(),
                }),
            },
        }
    }

    /// Resolve a gate operand to a qubit index in `[0, n)`.
    ///
    /// `Ok(None)` means the command is dropped under the recover policy.
    fn target_qubit(
        &self,
        stmt: &Statement,
        operand: &Operand,
        session: &mut Session,
    ) -> Result<Option<usize>> {
        let n = session.num_qubits();
        match operand.as_int() {
            Some(q) => match usize::try_from(q) {
                Ok(q) if q < n => Ok(Some(q)),
                _ => Err(EngineError::index_out_of_range(q, n)),
            },
            None => match self.config.on_malformed_gate_operand {
                OperandPolicy::Recover => {
                    session.record(DiagnosticKind::SkippedMalformedGateOperand, stmt, operand);
                    Ok(None)
                }
                OperandPolicy::Reject => Err(EngineError::MalformedGateOperand {
                    line: stmt.line,
                    keyword: stmt.command.mnemonic().to_string(),
                    operand: operand.text(),
                }),
            },
        }
    }
}

/// One-shot: interpret command lines with the default configuration.
pub fn run_circuit<I, S>(lines: I) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Interpreter::default().run(lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────
