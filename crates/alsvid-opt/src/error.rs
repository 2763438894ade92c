//! Error types for the optimizer crate.

use alsvid_grid::GridError;
use thiserror::Error;

/// Errors surfaced while binding an angle vector to the grid and scoring it.
///
/// Evaluator errors pass through unchanged; the search performs no retry and
/// no rollback of the grid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObjectiveError<E: std::error::Error> {
    /// The grid rejected a rotation write.
    #[error("grid rejected rotation update: {0}")]
    Grid(#[from] GridError),

    /// The evaluator failed to score the compiled sequence.
    #[error("circuit evaluation failed: {0}")]
    Evaluator(E),

    /// The angle vector does not match the captured rotation targets.
    #[error("expected {expected} rotation angles, got {got}")]
    RotationCountMismatch {
        /// Number of rotation targets captured from the grid.
        expected: usize,
        /// Length of the angle vector passed in.
        got: usize,
    },
}
