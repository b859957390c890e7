/// Circuit runtime.
///
/// The runtime sits above the command parser and owns execution:
///   - session lifecycle (default register, `init` resets)
///   - dispatch of each command to the gate operator
///   - malformed-operand policies and diagnostics
///   - extraction of the final probability distribution
pub mod interpreter;

pub use interpreter::{run_circuit, Interpreter, Outcome, DEFAULT_QUBITS};
