//! Engine configuration: allocation bound and malformed-operand policies.
//!
//! ```json
//! { "max_qubits": 16, "on_malformed_init": "reject" }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Upper bound accepted for `max_qubits`: 2^30 amplitudes is 16 GiB.
pub const HARD_MAX_QUBITS: usize = 30;

/// Default register bound: 2^24 amplitudes, 256 MiB.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// How the interpreter treats an operand it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandPolicy {
    /// Apply the documented fallback and record a diagnostic.
    #[default]
    Recover,
    /// Stop interpretation with an error.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest register `init` may allocate.
    pub max_qubits: usize,
    /// Policy for a missing or unparseable `init` operand.
    pub on_malformed_init: OperandPolicy,
    /// Policy for a missing or unparseable gate operand.
    pub on_malformed_gate_operand: OperandPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            on_malformed_init: OperandPolicy::Recover,
            on_malformed_gate_operand: OperandPolicy::Recover,
        }
    }
}

impl EngineConfig {
    /// Both malformed-operand policies set to [`OperandPolicy::Reject`].
    pub fn strict() -> Self {
        Self {
            on_malformed_init: OperandPolicy::Reject,
            on_malformed_gate_operand: OperandPolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > HARD_MAX_QUBITS {
            return Err(EngineError::config(format!(
                "max_qubits must be in 1..={HARD_MAX_QUBITS}, got {}",
                self.max_qubits
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::config(format!("cannot read '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}
