//! Circuit grid cell types.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Wrap an angle into the canonical `[0, 2π)` range.
pub fn wrap_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// The gate (or absence of one) occupying a single grid cell.
///
/// Rotation variants carry their angle in radians. Angles stored in a grid
/// are always normalized into `[0, 2π)`; use [`GateKind::rx`] and friends to
/// get a normalized value up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Unoccupied cell.
    Empty,
    /// Explicit identity placeholder.
    Identity,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
}

impl GateKind {
    /// An X rotation with the angle wrapped into `[0, 2π)`.
    pub fn rx(radians: f64) -> Self {
        GateKind::Rx(wrap_angle(radians))
    }

    /// A Y rotation with the angle wrapped into `[0, 2π)`.
    pub fn ry(radians: f64) -> Self {
        GateKind::Ry(wrap_angle(radians))
    }

    /// A Z rotation with the angle wrapped into `[0, 2π)`.
    pub fn rz(radians: f64) -> Self {
        GateKind::Rz(wrap_angle(radians))
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Empty => "empty",
            GateKind::Identity => "id",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
        }
    }

    /// True for `Empty` and `Identity`, the cells skipped by compilation.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, GateKind::Empty | GateKind::Identity)
    }

    /// True if this gate carries a tunable rotation angle.
    #[inline]
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateKind::Rx(_) | GateKind::Ry(_) | GateKind::Rz(_))
    }

    /// The rotation angle, if this gate carries one.
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateKind::Rx(theta) | GateKind::Ry(theta) | GateKind::Rz(theta) => Some(*theta),
            _ => None,
        }
    }

    /// The same gate with its angle replaced (and wrapped), or `None` for a
    /// gate that carries no angle.
    #[must_use]
    pub fn rotated(&self, radians: f64) -> Option<Self> {
        match self {
            GateKind::Rx(_) => Some(GateKind::rx(radians)),
            GateKind::Ry(_) => Some(GateKind::ry(radians)),
            GateKind::Rz(_) => Some(GateKind::rz(radians)),
            _ => None,
        }
    }

    /// The same gate with a normalized angle, for variants that carry one.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        match self {
            GateKind::Rx(theta) => GateKind::Rx(wrap_angle(theta)),
            GateKind::Ry(theta) => GateKind::Ry(wrap_angle(theta)),
            GateKind::Rz(theta) => GateKind::Rz(wrap_angle(theta)),
            other => other,
        }
    }
}

/// A single cell of the circuit grid: a gate plus its control wiring.
///
/// Control links name qubit rows in the node's own column whose state
/// conditions the gate. The grid validates the wiring on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitNode {
    /// The gate occupying the cell.
    pub gate: GateKind,
    /// Controlling qubit rows, in the same column as this node.
    pub controls: Vec<u32>,
}

impl CircuitNode {
    /// Create an uncontrolled node.
    pub fn new(gate: GateKind) -> Self {
        Self {
            gate,
            controls: vec![],
        }
    }

    /// An unoccupied cell.
    pub fn empty() -> Self {
        Self::new(GateKind::Empty)
    }

    /// Add a single control link.
    #[must_use]
    pub fn with_control(mut self, qubit: u32) -> Self {
        self.controls.push(qubit);
        self
    }

    /// Replace the control links.
    #[must_use]
    pub fn with_controls(mut self, controls: impl IntoIterator<Item = u32>) -> Self {
        self.controls = controls.into_iter().collect();
        self
    }

    /// True if the cell is unoccupied.
    pub fn is_empty(&self) -> bool {
        matches!(self.gate, GateKind::Empty)
    }
}

impl Default for CircuitNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<GateKind> for CircuitNode {
    fn from(gate: GateKind) -> Self {
        CircuitNode::new(gate)
    }
}
