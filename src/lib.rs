//! # qsim-engine
//!
//! State-vector simulator for small quantum circuits written as
//! line-oriented commands.
//!
//! ## Quick Start
//!
//! ```rust
//! use qsim_engine::run_circuit;
//!
//! // Equal superposition over two qubits
//! let out = run_circuit(["init 2", "h 0", "h 1"]).unwrap();
//!
//! assert_eq!(out.num_qubits, 2);
//! for p in &out.probabilities {
//!     assert!((p - 0.25).abs() < 1e-9);
//! }
//! ```
//!
//! ## Commands
//!
//! | Line      | Effect                                          |
//! |-----------|-------------------------------------------------|
//! | `init n`  | replace the register with n qubits in \|0…0⟩    |
//! | `h q`     | Hadamard on qubit q                             |
//! | `x q`     | Pauli-X on qubit q                              |
//! | other     | ignored                                         |
//!
//! Keywords are case-insensitive. A circuit with no `init` runs on one qubit.
//! Malformed operands are handled according to [`EngineConfig`]; see
//! [`OperandPolicy`].

pub mod compiler;
pub mod config;
pub mod core;
pub mod error;
pub mod runtime;

pub use compiler::{run_source, Command, Operand};
pub use config::{EngineConfig, OperandPolicy};
pub use core::StateVector;
pub use error::{Diagnostic, DiagnosticKind, EngineError, Result};
pub use runtime::{run_circuit, Interpreter, Outcome};
