//! Preset circuit grid layouts.

use alsvid_grid::{CircuitGridModel, CircuitNode, GateKind, GridPosition, GridResult};
use alsvid_opt::INITIAL_ROTATION;

/// The sandbox's default starting circuit: a tunable Ry on every qubit in
/// column 0, seeded at π, followed by a controlled-X ladder down the
/// diagonal (qubit q in column q, controlled by qubit q−1).
///
/// The rotations are the search axes; the ladder entangles neighboring
/// qubits so single-axis moves can still shift multi-qubit correlations.
pub fn entangling_ladder(num_qubits: u32, depth: u32) -> GridResult<CircuitGridModel> {
    let mut model = CircuitGridModel::new(num_qubits, depth);
    for qubit in 0..num_qubits {
        model.set_node(
            GridPosition::new(qubit, 0),
            CircuitNode::new(GateKind::ry(INITIAL_ROTATION)),
        )?;
    }
    for qubit in 1..num_qubits {
        if qubit >= depth {
            break;
        }
        model.set_node(
            GridPosition::new(qubit, qubit),
            CircuitNode::new(GateKind::X).with_control(qubit - 1),
        )?;
    }
    Ok(model)
}
