/// Circuit command front end.
///
/// Pipeline: command lines → Parser → `Statement`s → Interpreter → `Outcome`
///
/// Parsing is total; every decision about malformed input belongs to the
/// interpreter and its configured policies.
pub mod command;
pub mod parser;

pub use crate::runtime::{run_circuit, Interpreter, Outcome};
pub use command::{Command, Operand, Statement};
pub use parser::{parse, parse_line};

use crate::error::Result;

/// One-shot: split a text block into lines and interpret it with the default
/// configuration.
pub fn run_source(source: &str) -> Result<Outcome> {
    run_circuit(source.lines())
}
