//! Expectation-value scoring of compiled circuits.

use tracing::debug;

use alsvid_grid::Operation;
use alsvid_opt::{CircuitEvaluator, Evaluation};

use crate::error::{SimError, SimResult};
use crate::graph::Graph;
use crate::statevector::Statevector;

/// Scores a circuit by the expectation value of a diagonal cost operator.
///
/// The circuit is simulated from |0...0⟩ and the cost is
/// Σ_s p(s) · diagonal[s]; the dominant state is the basis state with the
/// highest probability. Both are deterministic functions of the operation
/// sequence, as the greedy search requires.
#[derive(Debug)]
pub struct ExpectationEvaluator {
    num_qubits: u32,
    diagonal: Vec<f64>,
}

impl ExpectationEvaluator {
    /// Create an evaluator from an explicit cost diagonal of length
    /// 2^`num_qubits`.
    pub fn new(num_qubits: u32, diagonal: Vec<f64>) -> SimResult<Self> {
        let expected = 1usize << num_qubits;
        if diagonal.len() != expected {
            return Err(SimError::DiagonalMismatch {
                expected,
                got: diagonal.len(),
            });
        }
        Ok(Self {
            num_qubits,
            diagonal,
        })
    }

    /// Create an evaluator for a Max-Cut graph, one qubit per node.
    ///
    /// Minimizing the returned cost maximizes the cut.
    pub fn maxcut(graph: &Graph) -> SimResult<Self> {
        Self::new(graph.n_nodes as u32, graph.ising_diagonal())
    }

    /// Number of qubits the evaluator expects.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Simulate a sequence and return the final state.
    pub fn simulate(&self, operations: &[Operation]) -> SimResult<Statevector> {
        let mut state = Statevector::new(self.num_qubits);
        state.apply_all(operations)?;
        Ok(state)
    }
}

impl CircuitEvaluator for ExpectationEvaluator {
    type Error = SimError;

    fn evaluate(&mut self, operations: &[Operation]) -> Result<Evaluation, SimError> {
        let state = self.simulate(operations)?;
        let cost = state
            .probabilities()
            .iter()
            .zip(&self.diagonal)
            .map(|(probability, energy)| probability * energy)
            .sum();
        let dominant_state = state.bitstring(state.dominant_index());
        debug!(cost, %dominant_state, ops = operations.len(), "circuit evaluated");
        Ok(Evaluation {
            cost,
            dominant_state,
        })
    }
}
