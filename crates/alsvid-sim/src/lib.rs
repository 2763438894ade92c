//! `alsvid-sim` — reference circuit evaluator for the Alsvid sandbox.
//!
//! Implements the evaluator contract from `alsvid-opt` with a dense
//! statevector simulation scored against a diagonal cost operator. The
//! shipped operator family is Max-Cut: a [`Graph`] maps onto an Ising
//! operator whose ground state encodes the maximum cut.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_grid::{GateKind, Operation};
//! use alsvid_opt::CircuitEvaluator;
//! use alsvid_sim::{ExpectationEvaluator, Graph};
//! use std::f64::consts::PI;
//!
//! let graph = Graph::square_4();
//! let mut evaluator = ExpectationEvaluator::maxcut(&graph).unwrap();
//!
//! // Flip qubits 0 and 2 into the alternating partition.
//! let operations = vec![
//!     Operation { gate: GateKind::rx(PI), target: 0, controls: vec![] },
//!     Operation { gate: GateKind::rx(PI), target: 2, controls: vec![] },
//! ];
//! let evaluation = evaluator.evaluate(&operations).unwrap();
//! assert_eq!(evaluation.dominant_state, "1010");
//! ```

pub mod error;
pub mod expectation;
pub mod graph;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use expectation::ExpectationEvaluator;
pub use graph::Graph;
pub use statevector::Statevector;
