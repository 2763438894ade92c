//! Per-axis greedy rotation search.
//!
//! A derivative-free hill climber over an angle vector in `[0, 2π)^n`. One
//! epoch sweeps every axis once; each axis probes one step in a heuristic
//! direction, flips on a strictly-worse cost, and otherwise keeps extending
//! until the cost rises, the domain boundary is hit, or the per-axis
//! iteration bound trips. The search can stall in a local minimum; that is a
//! property of the method, not a defect.

use std::f64::consts::{FRAC_PI_8, PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Derivative-free optimizer over an angle vector.
///
/// The objective is a black box; errors it returns abort the search and
/// propagate unchanged.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial`.
    fn minimize<F, E>(&self, objective: F, initial: Vec<f64>) -> Result<SearchResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>;
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Final angle vector, one entry per axis.
    pub rotations: Vec<f64>,
    /// Lowest accepted cost, or `None` when the input was empty and nothing
    /// was evaluated.
    pub cost: Option<f64>,
    /// Total number of objective evaluations.
    pub evaluations: usize,
    /// Accepted costs in order, starting with the seed vector's cost.
    pub history: Vec<f64>,
    /// Number of axes whose extension loop hit the iteration bound.
    pub capped_axes: usize,
}

/// Coordinate-wise greedy line search with a direction-flip heuristic.
///
/// Defaults to a single epoch and a step of π/8.
///
/// # Example
///
/// ```rust
/// use alsvid_opt::{Optimizer, PatternSearch};
/// use std::f64::consts::PI;
///
/// let search = PatternSearch::default();
/// let result: Result<_, std::convert::Infallible> =
///     search.minimize(|x| Ok((x[0] - 0.3).powi(2)), vec![PI]);
/// let result = result.unwrap();
/// assert!(result.rotations[0] < PI);
/// ```
#[derive(Debug, Clone)]
pub struct PatternSearch {
    epochs: usize,
    step: f64,
}

impl Default for PatternSearch {
    fn default() -> Self {
        Self {
            epochs: 1,
            step: FRAC_PI_8,
        }
    }
}

impl PatternSearch {
    /// Create a search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of full passes over the axes.
    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the probe step in radians. Must be positive.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// The configured probe step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The configured epoch count.
    pub fn epochs(&self) -> usize {
        self.epochs
    }
}

impl Optimizer for PatternSearch {
    fn minimize<F, E>(&self, mut objective: F, initial: Vec<f64>) -> Result<SearchResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        assert!(self.step > 0.0, "probe step must be positive");
        assert!(self.epochs >= 1, "at least one epoch is required");

        if initial.is_empty() {
            return Ok(SearchResult {
                rotations: initial,
                cost: None,
                evaluations: 0,
                history: vec![],
                capped_axes: 0,
            });
        }

        let mut rotations = initial;
        let iteration_bound = TAU / self.step;
        let mut evaluations = 0usize;
        let mut capped_axes = 0usize;

        let mut best_cost = objective(&rotations)?;
        evaluations += 1;
        let mut history = vec![best_cost];

        for epoch in 0..self.epochs {
            for axis in 0..rotations.len() {
                let mut current = rotations[axis];
                let mut proposed = current;

                // Angles above half the domain are assumed closer to
                // improving by decreasing.
                let mut direction = if current > PI { -1.0 } else { 1.0 };

                proposed += self.step * direction;
                if !(0.0..TAU).contains(&proposed) {
                    // First probe already out of bounds: abandon the axis.
                    continue;
                }
                rotations[axis] = proposed;
                let probed = objective(&rotations)?;
                evaluations += 1;
                if probed > best_cost {
                    // Wrong direction: restore the angle and flip. The
                    // flipped retry runs as the first extension iteration,
                    // which re-evaluates the unchanged vector before probing
                    // the other side.
                    rotations[axis] = current;
                    direction = -direction;
                } else {
                    current = proposed;
                    best_cost = probed;
                    history.push(best_cost);
                }

                let mut iterations = 0usize;
                loop {
                    iterations += 1;
                    proposed += self.step * direction;
                    if !(0.0..TAU).contains(&proposed) {
                        // Keep the last accepted value.
                        break;
                    }
                    rotations[axis] = proposed;
                    let probed = objective(&rotations)?;
                    evaluations += 1;
                    if probed > best_cost {
                        rotations[axis] = current;
                        break;
                    }
                    if iterations as f64 > iteration_bound {
                        warn!(axis, iterations, "extension loop exceeded its iteration bound");
                        capped_axes += 1;
                        break;
                    }
                    current = proposed;
                    best_cost = probed;
                    history.push(best_cost);
                }
            }
            debug!(epoch, best_cost, evaluations, "epoch complete");
        }

        Ok(SearchResult {
            rotations,
            cost: Some(best_cost),
            evaluations,
            history,
            capped_axes,
        })
    }
}
