//! Error types for the grid crate.

use crate::position::GridPosition;
use thiserror::Error;

/// Errors that can occur when mutating or reading the circuit grid.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GridError {
    /// Position outside the declared grid dimensions.
    #[error("position {position} is outside the {num_qubits}x{depth} grid")]
    OutOfBounds {
        /// The offending position.
        position: GridPosition,
        /// Number of qubit rows in the grid.
        num_qubits: u32,
        /// Number of time-step columns in the grid.
        depth: u32,
    },

    /// The node at a position cannot accept the requested operation.
    #[error("invalid node at {position}: {reason}")]
    InvalidNode {
        /// Position of the offending node.
        position: GridPosition,
        /// What made the operation invalid.
        reason: String,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
