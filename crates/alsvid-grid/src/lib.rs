//! Alsvid circuit grid model
//!
//! This crate provides the data structures for the editable circuit grid at
//! the heart of the Alsvid variational sandbox: a rectangular arrangement of
//! gates addressed by (qubit row, time column), with control-qubit wiring
//! and tunable rotation angles.
//!
//! # Overview
//!
//! The grid is the single mutable resource shared between interactive edits
//! and the rotation optimizer. Two derived, ephemeral views are compiled
//! from it on demand:
//!
//! - the **operation sequence** ([`Operation`]): the ordered gate
//!   applications an evaluator scores;
//! - the **rotation parameter list** ([`RotationParameter`]): the tunable
//!   angles in a deterministic order, so an optimizer can index axes
//!   meaningfully between calls.
//!
//! # Example
//!
//! ```rust
//! use alsvid_grid::{CircuitGridModel, CircuitNode, GateKind, GridPosition};
//! use std::f64::consts::PI;
//!
//! let mut model = CircuitGridModel::new(2, 2);
//!
//! // Ry(π) on qubit 0, then an X on qubit 1 controlled by qubit 0.
//! model
//!     .set_node(GridPosition::new(0, 0), CircuitNode::new(GateKind::ry(PI)))
//!     .unwrap();
//! model
//!     .set_node(
//!         GridPosition::new(1, 1),
//!         CircuitNode::new(GateKind::X).with_control(0),
//!     )
//!     .unwrap();
//!
//! let operations = model.compute_operations();
//! assert_eq!(operations.len(), 2);
//! assert_eq!(operations[1].controls, vec![0]);
//!
//! // Re-tune the rotation; the stored angle is wrapped into [0, 2π).
//! model.set_rotation(GridPosition::new(0, 0), 3.0 * PI).unwrap();
//! let parameters = model.rotation_parameters();
//! assert!((parameters[0].radians - PI).abs() < 1e-12);
//! ```

pub mod error;
pub mod model;
pub mod node;
pub mod operation;
pub mod position;

pub use error::{GridError, GridResult};
pub use model::CircuitGridModel;
pub use node::{CircuitNode, GateKind, wrap_angle};
pub use operation::{Operation, RotationParameter};
pub use position::GridPosition;
