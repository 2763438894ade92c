//! Max-Cut sandbox runner.
//!
//! Wires the full loop the interactive sandbox runs after each edit: build
//! a grid layout, seed every rotation at π, greedily search the angles
//! against the Max-Cut expectation evaluator, then re-evaluate the accepted
//! vector so the grid and the reported dominant state are in sync.

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use alsvid_grid::Operation;
use alsvid_opt::{ObjectiveAdapter, Optimizer, PatternSearch};
use alsvid_sim::{ExpectationEvaluator, Graph};

use crate::layouts::entangling_ladder;

/// Result of a Max-Cut sandbox run.
#[derive(Debug, Clone, Serialize)]
pub struct MaxCutResult {
    /// Optimized rotation angles, in axis order.
    pub rotations: Vec<f64>,
    /// Expectation value of the cost operator at the optimized angles.
    pub cost: f64,
    /// Most probable basis state of the final circuit, qubit 0 first.
    pub dominant_state: String,
    /// Cut value of the dominant state's partition.
    pub cut_value: f64,
    /// Best cut found by brute force.
    pub best_cut: f64,
    /// `cut_value / best_cut`.
    pub approximation_ratio: f64,
    /// Total circuit evaluations, including the final resync.
    pub circuit_evaluations: usize,
    /// The compiled operation sequence at the optimized angles.
    pub operations: Vec<Operation>,
}

/// Runner configuration.
pub struct MaxCutRunner {
    /// The graph to cut.
    pub graph: Graph,
    /// Grid depth (time-step columns).
    pub depth: u32,
    /// Optimizer epochs.
    pub epochs: usize,
    /// Optimizer probe step in radians.
    pub step: f64,
}

impl MaxCutRunner {
    /// Create a runner with the default search configuration.
    pub fn new(graph: Graph) -> Self {
        let search = PatternSearch::default();
        let step = search.step();
        let epochs = search.epochs();
        Self {
            graph,
            depth: 12,
            epochs,
            step,
        }
    }

    /// Set the grid depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the optimizer epoch count.
    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the optimizer probe step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Build the layout, search the rotation angles, and score the result.
    pub fn run(&self) -> anyhow::Result<MaxCutResult> {
        let num_qubits = u32::try_from(self.graph.n_nodes).context("graph too large")?;
        let mut model =
            entangling_ladder(num_qubits, self.depth).context("building grid layout")?;
        let mut evaluator =
            ExpectationEvaluator::maxcut(&self.graph).context("building evaluator")?;
        let mut adapter = ObjectiveAdapter::new(&mut model, &mut evaluator);

        let seed = adapter.initial_rotations();
        let search = PatternSearch::default()
            .with_epochs(self.epochs)
            .with_step(self.step);

        let result = search
            .minimize(|angles| adapter.evaluate_rotations(angles), seed)
            .context("rotation search failed")?;

        // Resync the grid to the accepted vector; this final evaluation is
        // the one whose dominant state we report.
        let evaluation = adapter
            .evaluate_full(&result.rotations)
            .context("final evaluation failed")?;
        let operations = model.compute_operations();

        let cut_value = self.graph.cut_value_of_bits(&evaluation.dominant_state);
        let (_, best_cut) = self.graph.max_cut_brute_force();
        let approximation_ratio = if best_cut > 0.0 { cut_value / best_cut } else { 1.0 };

        info!(
            cost = evaluation.cost,
            dominant_state = %evaluation.dominant_state,
            cut_value,
            evaluations = result.evaluations + 1,
            "sandbox run complete"
        );

        Ok(MaxCutResult {
            rotations: result.rotations,
            cost: evaluation.cost,
            dominant_state: evaluation.dominant_state,
            cut_value,
            best_cut,
            approximation_ratio,
            circuit_evaluations: result.evaluations + 1,
            operations,
        })
    }
}
