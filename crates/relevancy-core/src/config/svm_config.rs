use serde::{Deserialize, Serialize};

use super::defaults;

/// What the ranking reports for each descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    /// Signed distance-like value from the decision function.
    #[default]
    Decision,
    /// Platt-scaled probability of the positive class.
    Probability,
}

/// Binary classifier hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmConfig {
    /// Soft-margin penalty.
    pub c: f64,
    /// Derive the positive class weight as max(1, |neg| / |pos|).
    pub auto_positive_weight: bool,
    /// Positive class weight when `auto_positive_weight` is off.
    pub positive_weight: f64,
    pub negative_weight: f64,
    /// KKT violation tolerance for the solver's stopping criterion.
    pub tolerance: f64,
    pub max_iterations: usize,
    pub score_mode: ScoreMode,
}

impl SvmConfig {
    /// Per-class weights (positive, negative) for a training set of the given shape.
    pub fn class_weights(&self, num_pos: usize, num_neg: usize) -> (f64, f64) {
        let positive = if self.auto_positive_weight {
            if num_pos == 0 {
                1.0
            } else {
                (num_neg as f64 / num_pos as f64).max(1.0)
            }
        } else {
            self.positive_weight
        };
        (positive, self.negative_weight)
    }
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            c: defaults::DEFAULT_SVM_C,
            auto_positive_weight: defaults::DEFAULT_AUTO_POSITIVE_WEIGHT,
            positive_weight: defaults::DEFAULT_POSITIVE_WEIGHT,
            negative_weight: defaults::DEFAULT_NEGATIVE_WEIGHT,
            tolerance: defaults::DEFAULT_SVM_TOLERANCE,
            max_iterations: defaults::DEFAULT_SVM_MAX_ITERATIONS,
            score_mode: ScoreMode::default(),
        }
    }
}
