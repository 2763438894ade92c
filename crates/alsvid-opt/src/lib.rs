//! Alsvid rotation optimizer
//!
//! Derivative-free search over the rotation angles of a circuit grid. The
//! crate has three pieces:
//!
//! - [`CircuitEvaluator`]: the contract for the external engine that scores
//!   a compiled operation sequence with a scalar cost and a dominant basis
//!   state;
//! - [`ObjectiveAdapter`]: binds a candidate angle vector to a
//!   [`CircuitGridModel`](alsvid_grid::CircuitGridModel) and an evaluator,
//!   producing one scalar cost per vector (and mutating the grid as its
//!   working mechanism);
//! - [`PatternSearch`]: a coordinate-wise greedy line search over
//!   `[0, 2π)^n`, one epoch by default, step π/8.
//!
//! # Example
//!
//! ```rust
//! use alsvid_opt::{Optimizer, PatternSearch};
//! use std::f64::consts::PI;
//!
//! // Minimize (x − 0.3)² starting from the conventional π seed.
//! let search = PatternSearch::default();
//! let result: Result<_, std::convert::Infallible> =
//!     search.minimize(|x| Ok((x[0] - 0.3).powi(2)), vec![PI]);
//! let result = result.unwrap();
//!
//! assert!((result.rotations[0] - 0.3).abs() < (PI - 0.3).abs());
//! assert!(result.cost.unwrap() <= (PI - 0.3).powi(2));
//! ```
//!
//! The search is a hill climber: it can stall in a local minimum, and the
//! grid is left reflecting the last vector the adapter evaluated. Callers
//! wanting the grid in sync with the returned vector run one final
//! [`ObjectiveAdapter::evaluate_full`] on it.

pub mod error;
pub mod evaluator;
pub mod objective;
pub mod search;

pub use error::ObjectiveError;
pub use evaluator::{CircuitEvaluator, Evaluation};
pub use objective::{INITIAL_ROTATION, ObjectiveAdapter};
pub use search::{Optimizer, PatternSearch, SearchResult};
