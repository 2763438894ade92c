//! Binding an angle vector to the grid model and an evaluator.

use std::f64::consts::PI;

use alsvid_grid::{CircuitGridModel, RotationParameter};

use crate::error::ObjectiveError;
use crate::evaluator::{CircuitEvaluator, Evaluation};

/// Seed value for every rotation parameter before a search run.
///
/// π rather than zero: a zero-angle rotation leaves the circuit degenerate
/// for this cost landscape, while π is a safe non-degenerate starting point.
pub const INITIAL_ROTATION: f64 = PI;

/// Turns an angle vector into a scalar cost by writing the angles into the
/// grid, recompiling, and scoring the result.
///
/// The adapter captures the grid's rotation-parameter list at construction;
/// that captured order is what gives each axis of the angle vector its
/// meaning. Writing the angles mutates the model in place: after any
/// evaluation the grid reflects the last vector passed in, whether or not
/// the search went on to accept it.
pub struct ObjectiveAdapter<'a, E> {
    model: &'a mut CircuitGridModel,
    evaluator: &'a mut E,
    targets: Vec<RotationParameter>,
}

impl<'a, E: CircuitEvaluator> ObjectiveAdapter<'a, E> {
    /// Bind a model and an evaluator, capturing the current rotation targets.
    pub fn new(model: &'a mut CircuitGridModel, evaluator: &'a mut E) -> Self {
        let targets = model.rotation_parameters();
        Self {
            model,
            evaluator,
            targets,
        }
    }

    /// The rotation targets captured at construction, in axis order.
    pub fn targets(&self) -> &[RotationParameter] {
        &self.targets
    }

    /// The conventional starting vector: every axis at [`INITIAL_ROTATION`].
    pub fn initial_rotations(&self) -> Vec<f64> {
        vec![INITIAL_ROTATION; self.targets.len()]
    }

    /// Write the angles into the grid, recompile, and score the circuit.
    ///
    /// Returns the full [`Evaluation`] so a caller can retain the dominant
    /// state from a final evaluation.
    pub fn evaluate_full(
        &mut self,
        radians: &[f64],
    ) -> Result<Evaluation, ObjectiveError<E::Error>> {
        if radians.len() != self.targets.len() {
            return Err(ObjectiveError::RotationCountMismatch {
                expected: self.targets.len(),
                got: radians.len(),
            });
        }
        for (target, &angle) in self.targets.iter().zip(radians) {
            self.model.set_rotation(target.position, angle)?;
        }
        let operations = self.model.compute_operations();
        self.evaluator
            .evaluate(&operations)
            .map_err(ObjectiveError::Evaluator)
    }

    /// Score an angle vector, discarding everything but the cost.
    pub fn evaluate_rotations(
        &mut self,
        radians: &[f64],
    ) -> Result<f64, ObjectiveError<E::Error>> {
        Ok(self.evaluate_full(radians)?.cost)
    }
}
