//! Circuit command representation.
//!
//! Each non-blank source line parses to exactly one `Command`. The set is
//! closed: the interpreter dispatches with an exhaustive `match`, and any
//! keyword outside the set becomes `Unrecognized` rather than a string the
//! runtime has to inspect again.
//!
//! Operands are kept as [`Operand`] instead of being resolved at parse time,
//! because what to do with a malformed operand is an interpreter policy.

// ── Operand ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A token that parsed as a signed integer.
    Int(i64),
    /// An integer literal too wide for `i64`, kept verbatim. Still an integer:
    /// it resolves out of range rather than malformed.
    Overflow(String),
    /// No token after the keyword.
    Missing,
    /// A token that is not an integer, kept verbatim for diagnostics.
    Malformed(String),
}

impl Operand {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Self::Missing,
            Some(t) => match t.parse::<i64>() {
                Ok(n) => Self::Int(n),
                Err(_) if is_integer_literal(t) => Self::Overflow(t.to_string()),
                Err(_) => Self::Malformed(t.to_string()),
            },
        }
    }

    /// Integer value of the operand. Overflowing literals saturate to
    /// `i64::MIN`/`i64::MAX`, which no register size or qubit index reaches.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Overflow(t) if t.starts_with('-') => Some(i64::MIN),
            Self::Overflow(_) => Some(i64::MAX),
            _ => None,
        }
    }

    /// Operand text as written; empty when missing.
    pub fn text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Missing => String::new(),
            Self::Overflow(t) | Self::Malformed(t) => t.clone(),
        }
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ── Command ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `init <n>`: discard the state and allocate |0…0⟩ over n qubits.
    Init(Operand),
    /// `h <q>`
    Hadamard(Operand),
    /// `x <q>`
    PauliX(Operand),
    /// Any other keyword, lowercased. Reserved for future gates.
    Unrecognized(String),
}

impl Command {
    /// Keyword used in source and diagnostics.
    pub fn mnemonic(&self) -> &str {
        match self {
            Self::Init(_) => "init",
            Self::Hadamard(_) => "h",
            Self::PauliX(_) => "x",
            Self::Unrecognized(kw) => kw,
        }
    }

    /// True if this command applies a gate.
    pub fn is_gate(&self) -> bool {
        matches!(self, Self::Hadamard(_) | Self::PauliX(_))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init(op) | Self::Hadamard(op) | Self::PauliX(op) => match op {
                Operand::Missing => write!(f, "{}", self.mnemonic()),
                _ => write!(f, "{} {}", self.mnemonic(), op.text()),
            },
            Self::Unrecognized(kw) => write!(f, "{kw}"),
        }
    }
}

// ── Statement ─────────────────────────────────────────────────────────────

/// A command annotated with its source line number (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub command: Command,
    pub line: usize,
}
