//! The circuit evaluator contract.

use alsvid_grid::Operation;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one compiled operation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Scalar cost of the circuit against the target operator.
    pub cost: f64,
    /// The basis state with the highest measurement probability, written as
    /// a bit-string with qubit 0 first.
    pub dominant_state: String,
}

/// Scores compiled operation sequences.
///
/// Implementations must be deterministic and referentially transparent in
/// the operation sequence: the greedy search compares costs across calls and
/// is only meaningful if equal inputs produce equal outputs. An evaluation
/// may be expensive (it typically simulates a 2^Q-dimensional system), so
/// callers bound the number of calls they make.
pub trait CircuitEvaluator {
    /// Error produced when a sequence cannot be scored.
    type Error: std::error::Error;

    /// Score an operation sequence.
    fn evaluate(&mut self, operations: &[Operation]) -> Result<Evaluation, Self::Error>;
}
