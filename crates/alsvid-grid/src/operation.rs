//! Derived views compiled from the grid.
//!
//! Both types are ephemeral copies of grid state: mutating a returned value
//! never affects the grid unless it is explicitly written back.

use serde::{Deserialize, Serialize};

use crate::node::GateKind;
use crate::position::GridPosition;

/// One gate application in the compiled operation sequence.
///
/// The sequence is ordered column-major over the grid (time-step outer,
/// qubit inner) with placeholder cells skipped and control links resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The gate to apply. Never `Empty` or `Identity` in a compiled sequence.
    pub gate: GateKind,
    /// The target qubit row.
    pub target: u32,
    /// Controlling qubit rows, if any.
    pub controls: Vec<u32>,
}

impl Operation {
    /// Total number of qubits this operation touches.
    pub fn num_qubits(&self) -> usize {
        1 + self.controls.len()
    }

    /// The rotation angle, if the gate carries one.
    pub fn angle(&self) -> Option<f64> {
        self.gate.angle()
    }

    /// Get the name of the underlying gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}

/// One tunable rotation angle and the cell it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationParameter {
    /// The cell holding the rotation gate.
    pub position: GridPosition,
    /// The angle at scan time, in `[0, 2π)`.
    pub radians: f64,
}
