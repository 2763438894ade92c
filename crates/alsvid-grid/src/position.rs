//! Grid cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (qubit row, time column) coordinate into the circuit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// Qubit row, `0..num_qubits`.
    pub qubit: u32,
    /// Time-step column, `0..depth`.
    pub column: u32,
}

impl GridPosition {
    /// Create a new position.
    pub fn new(qubit: u32, column: u32) -> Self {
        Self { qubit, column }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}@t{}", self.qubit, self.column)
    }
}

impl From<(u32, u32)> for GridPosition {
    fn from((qubit, column): (u32, u32)) -> Self {
        GridPosition { qubit, column }
    }
}
