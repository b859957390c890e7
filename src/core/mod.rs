pub mod gates;
pub mod probability;
pub mod state;

// Convenience re-exports for library users
pub use gates::{apply_single_qubit_gate, hadamard, pauli_x, Matrix2x2};
pub use probability::{probabilities, qubit_count, sample_counts, total_probability};
pub use state::StateVector;
