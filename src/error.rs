//! Error and diagnostic types shared by every engine stage.
//!
//! Hard failures are reported as [`EngineError`]. Conditions the interpreter
//! recovers from under the default policy are reported as [`Diagnostic`]s
//! alongside the result, so callers can log, abort or ignore them.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that stop the engine from producing a state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A gate addressed a qubit outside `[0, num_qubits)`.
    #[error("qubit index {qubit} is out of range for a {num_qubits}-qubit register")]
    IndexOutOfRange { qubit: i64, num_qubits: usize },

    /// Register size is zero or negative.
    #[error("register size must be a positive integer, got {requested}")]
    InvalidRegisterSize { requested: i64 },

    /// Register size exceeds the configured allocation bound.
    #[error("register of {requested} qubits exceeds the configured maximum of {max}")]
    RegisterTooLarge { requested: usize, max: usize },

    /// `init` operand missing or unparseable while the reject policy is active.
    #[error("line {line}: malformed 'init' operand '{operand}'")]
    MalformedInit { line: usize, operand: String },

    /// Gate operand missing or unparseable while the reject policy is active.
    #[error("line {line}: malformed operand '{operand}' for gate '{keyword}'")]
    MalformedGateOperand {
        line: usize,
        keyword: String,
        operand: String,
    },

    /// Amplitude buffer whose length is not a power of two of at least 2.
    #[error("state vector length {len} is not 2^n for any n >= 1")]
    InvalidStateLength { len: usize },

    /// Probability distribution that cannot be sampled.
    #[error("cannot sample distribution: {0}")]
    Sampling(String),

    /// Unreadable or invalid engine configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub fn index_out_of_range(qubit: i64, num_qubits: usize) -> Self {
        Self::IndexOutOfRange { qubit, num_qubits }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// What the interpreter did when it met a malformed operand under the
/// recover policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `init` fell back to a one-qubit register.
    DefaultedMalformedInit,
    /// A gate command was dropped without touching the state.
    SkippedMalformedGateOperand,
}

/// A recovered condition, tied to the 1-based source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub keyword: String,
    /// Operand text as written; empty when the operand was missing.
    pub operand: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operand = if self.operand.is_empty() { "<missing>" } else { &self.operand };
        match self.kind {
            DiagnosticKind::DefaultedMalformedInit => write!(
                f,
                "line {}: '{} {}' is not a valid register size, defaulted to 1 qubit",
                self.line, self.keyword, operand
            ),
            DiagnosticKind::SkippedMalformedGateOperand => write!(
                f,
                "line {}: '{} {}' has no valid qubit index, command skipped",
                self.line, self.keyword, operand
            ),
        }
    }
}
