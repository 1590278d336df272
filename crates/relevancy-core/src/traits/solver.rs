use crate::errors::RelevancyResult;
use crate::models::{KernelMatrix, Label};

/// Hyperparameters handed to a solver for one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    pub c: f64,
    pub positive_weight: f64,
    pub negative_weight: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

/// Scores a query from its kernel values against the training set.
pub trait IDecisionFunction: Send + Sync {
    /// `kernel_row[t]` is the kernel between the query and training example `t`.
    /// Positive results lean toward the positive class.
    fn decision_value(&self, kernel_row: &[f64]) -> f64;

    /// Number of training examples that contribute to the decision.
    fn support_vector_count(&self) -> usize;
}

/// Binary classifier trained on a precomputed kernel.
pub trait IClassifierSolver: Send + Sync {
    fn train(
        &self,
        kernel: &KernelMatrix,
        labels: &[Label],
        params: &SolverParams,
    ) -> RelevancyResult<Box<dyn IDecisionFunction>>;

    /// Human-readable solver name.
    fn name(&self) -> &str;
}
