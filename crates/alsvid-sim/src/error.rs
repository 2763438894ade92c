//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while simulating and scoring an operation sequence.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// An operation references a qubit index outside the register.
    #[error("operation references qubit {qubit} but the register only has {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the register.
        num_qubits: u32,
    },

    /// The cost diagonal does not match the register dimension.
    #[error("cost diagonal has {got} entries, expected {expected} for the register")]
    DiagonalMismatch {
        /// Expected number of entries (2^num_qubits).
        expected: usize,
        /// Number of entries provided.
        got: usize,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
