//! The circuit grid model.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::node::CircuitNode;
use crate::operation::{Operation, RotationParameter};
use crate::position::GridPosition;

/// A rectangular grid of circuit nodes, `num_qubits` rows by `depth` columns.
///
/// The grid exclusively owns its nodes. Cells that were never set read back
/// as [`CircuitNode::empty`]. Every mutation targets exactly one cell and
/// preserves the grid's dimensions.
///
/// # Example
///
/// ```rust
/// use alsvid_grid::{CircuitGridModel, CircuitNode, GateKind, GridPosition};
/// use std::f64::consts::PI;
///
/// let mut model = CircuitGridModel::new(2, 3);
/// model
///     .set_node(GridPosition::new(0, 0), CircuitNode::new(GateKind::ry(PI)))
///     .unwrap();
/// model
///     .set_node(
///         GridPosition::new(1, 1),
///         CircuitNode::new(GateKind::X).with_control(0),
///     )
///     .unwrap();
///
/// assert_eq!(model.compute_operations().len(), 2);
/// assert_eq!(model.rotation_parameters().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitGridModel {
    num_qubits: u32,
    depth: u32,
    /// Column-major storage: index = column * num_qubits + qubit.
    nodes: Vec<CircuitNode>,
}

impl CircuitGridModel {
    /// Create a grid with every cell empty.
    pub fn new(num_qubits: u32, depth: u32) -> Self {
        let cells = (num_qubits as usize) * (depth as usize);
        Self {
            num_qubits,
            depth,
            nodes: vec![CircuitNode::empty(); cells],
        }
    }

    /// Number of qubit rows.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of time-step columns.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn index_of(&self, position: GridPosition) -> GridResult<usize> {
        if position.qubit >= self.num_qubits || position.column >= self.depth {
            return Err(GridError::OutOfBounds {
                position,
                num_qubits: self.num_qubits,
                depth: self.depth,
            });
        }
        Ok(position.column as usize * self.num_qubits as usize + position.qubit as usize)
    }

    /// Place a node, overwriting whatever occupied the cell (no merge).
    ///
    /// Control links are validated against the grid: a link must name an
    /// existing qubit row and must not name the node's own row. Rotation
    /// angles are wrapped into `[0, 2π)` on store.
    pub fn set_node(&mut self, position: GridPosition, node: CircuitNode) -> GridResult<()> {
        let index = self.index_of(position)?;
        for &control in &node.controls {
            if control >= self.num_qubits {
                return Err(GridError::OutOfBounds {
                    position: GridPosition::new(control, position.column),
                    num_qubits: self.num_qubits,
                    depth: self.depth,
                });
            }
            if control == position.qubit {
                return Err(GridError::InvalidNode {
                    position,
                    reason: "control link references the node's own qubit".into(),
                });
            }
        }
        self.nodes[index] = CircuitNode {
            gate: node.gate.normalized(),
            controls: node.controls,
        };
        Ok(())
    }

    /// The node at a position. Cells never set read back as empty.
    pub fn node(&self, position: GridPosition) -> GridResult<&CircuitNode> {
        let index = self.index_of(position)?;
        Ok(&self.nodes[index])
    }

    /// Reset a cell to empty.
    pub fn clear_node(&mut self, position: GridPosition) -> GridResult<()> {
        let index = self.index_of(position)?;
        self.nodes[index] = CircuitNode::empty();
        Ok(())
    }

    /// Overwrite the rotation angle of the gate at `position`, wrapped into
    /// `[0, 2π)`.
    ///
    /// Fails with [`GridError::InvalidNode`] if the gate there carries no
    /// angle.
    pub fn set_rotation(&mut self, position: GridPosition, radians: f64) -> GridResult<()> {
        let index = self.index_of(position)?;
        let node = &mut self.nodes[index];
        match node.gate.rotated(radians) {
            Some(gate) => {
                node.gate = gate;
                Ok(())
            }
            None => Err(GridError::InvalidNode {
                position,
                reason: format!("{} gate does not carry a rotation angle", node.gate.name()),
            }),
        }
    }

    /// Compile the grid into an ordered operation sequence.
    ///
    /// Scans column-major (time-step outer, qubit inner), skips placeholder
    /// cells, and resolves control links into multi-qubit gate instances.
    /// Pure function of the current grid state.
    pub fn compute_operations(&self) -> Vec<Operation> {
        let mut operations = vec![];
        for column in 0..self.depth {
            for qubit in 0..self.num_qubits {
                let node = &self.nodes[column as usize * self.num_qubits as usize + qubit as usize];
                if node.gate.is_placeholder() {
                    continue;
                }
                operations.push(Operation {
                    gate: node.gate,
                    target: qubit,
                    controls: node.controls.clone(),
                });
            }
        }
        operations
    }

    /// The rotation-gate cells currently in the grid, in compilation order.
    ///
    /// The ordering is the same column-major scan as
    /// [`compute_operations`](Self::compute_operations), so an index into
    /// this list is stable between calls with no intervening mutation.
    pub fn rotation_parameters(&self) -> Vec<RotationParameter> {
        let mut parameters = vec![];
        for column in 0..self.depth {
            for qubit in 0..self.num_qubits {
                let node = &self.nodes[column as usize * self.num_qubits as usize + qubit as usize];
                if let Some(radians) = node.gate.angle() {
                    parameters.push(RotationParameter {
                        position: GridPosition::new(qubit, column),
                        radians,
                    });
                }
            }
        }
        parameters
    }
}
