//! Per-query classifier training.
//!
//! Builds the kernel matrix over positives + negatives, hands it to an
//! `IClassifierSolver`, and wraps the result in a `TrainedModel` that can
//! score any vector through its kernel row. Nothing here outlives one
//! `rank` call.

mod platt;
mod smo;

pub use platt::PlattSigmoid;
pub use smo::{SmoSolver, SvmDecisionFunction};

use std::sync::Arc;

use relevancy_core::config::{ScoreMode, SvmConfig};
use relevancy_core::errors::{RelevancyError, RelevancyResult, TrainingError};
use relevancy_core::models::{Descriptor, Label};
use relevancy_core::traits::{IClassifierSolver, IDecisionFunction, SolverParams};
use tracing::{info, warn};

use crate::kernel::{histogram_intersection, kernel_matrix, kernel_row};

/// Labelled training vectors, positives first.
#[derive(Debug, Clone)]
pub struct TrainingSet<'a> {
    vectors: Vec<&'a [f64]>,
    labels: Vec<Label>,
    num_positive: usize,
}

impl<'a> TrainingSet<'a> {
    pub fn new(positives: &'a [Descriptor], negatives: &[&'a Descriptor]) -> Self {
        let mut vectors = Vec::with_capacity(positives.len() + negatives.len());
        let mut labels = Vec::with_capacity(positives.len() + negatives.len());
        for p in positives {
            vectors.push(p.vector());
            labels.push(Label::Positive);
        }
        for n in negatives {
            vectors.push(n.vector());
            labels.push(Label::Negative);
        }
        Self {
            vectors,
            labels,
            num_positive: positives.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn num_positive(&self) -> usize {
        self.num_positive
    }

    pub fn num_negative(&self) -> usize {
        self.vectors.len() - self.num_positive
    }

    pub fn vectors(&self) -> &[&'a [f64]] {
        &self.vectors
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn positives(&self) -> &[&'a [f64]] {
        &self.vectors[..self.num_positive]
    }
}

/// Scoring function produced by one training run.
pub enum TrainedModel<'a> {
    /// Two-class decision function over the training set's kernel rows.
    Classifier {
        training: Vec<&'a [f64]>,
        decision: Box<dyn IDecisionFunction>,
        calibration: Option<PlattSigmoid>,
    },
    /// No negatives available: mean intersection with the positives.
    SimilarityOnly { positives: Vec<&'a [f64]> },
}

impl TrainedModel<'_> {
    /// Score a vector. Higher means closer to the positive class.
    pub fn score(&self, vector: &[f64]) -> RelevancyResult<f64> {
        match self {
            Self::Classifier {
                training,
                decision,
                calibration,
            } => {
                let row = kernel_row(vector, training)?;
                let value = decision.decision_value(&row);
                Ok(match calibration {
                    Some(sigmoid) => sigmoid.probability(value),
                    None => value,
                })
            }
            Self::SimilarityOnly { positives } => {
                let mut total = 0.0;
                for p in positives {
                    total += histogram_intersection(vector, p)?;
                }
                Ok(total / positives.len() as f64)
            }
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::SimilarityOnly { .. })
    }
}

impl std::fmt::Debug for TrainedModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classifier {
                training,
                decision,
                calibration,
            } => f
                .debug_struct("Classifier")
                .field("training", &training.len())
                .field("support_vectors", &decision.support_vector_count())
                .field("calibration", calibration)
                .finish(),
            Self::SimilarityOnly { positives } => f
                .debug_struct("SimilarityOnly")
                .field("positives", &positives.len())
                .finish(),
        }
    }
}

/// Trains a `TrainedModel` through an injected solver.
pub struct ClassifierTrainer {
    solver: Arc<dyn IClassifierSolver>,
    svm: SvmConfig,
}

impl ClassifierTrainer {
    pub fn new(solver: Arc<dyn IClassifierSolver>, svm: SvmConfig) -> Self {
        Self { solver, svm }
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    pub fn train<'a>(&self, set: TrainingSet<'a>) -> RelevancyResult<TrainedModel<'a>> {
        let _span = crate::train_span!(set.num_positive(), set.num_negative()).entered();

        if set.num_positive() == 0 {
            return Err(RelevancyError::InvalidQuery {
                reason: "training requires at least one positive exemplar".into(),
            });
        }
        if set.num_negative() == 0 {
            warn!(
                positives = set.num_positive(),
                "no negative exemplars available, ranking by similarity to positives"
            );
            return Ok(TrainedModel::SimilarityOnly {
                positives: set.positives().to_vec(),
            });
        }

        let kernel = kernel_matrix(set.vectors())?;
        let (positive_weight, negative_weight) =
            self.svm.class_weights(set.num_positive(), set.num_negative());
        let params = SolverParams {
            c: self.svm.c,
            positive_weight,
            negative_weight,
            tolerance: self.svm.tolerance,
            max_iterations: self.svm.max_iterations,
        };

        let decision = self.solver.train(&kernel, set.labels(), &params)?;
        if decision.support_vector_count() == 0 {
            return Err(TrainingError::EmptyModel.into());
        }

        let calibration = match self.svm.score_mode {
            ScoreMode::Decision => None,
            ScoreMode::Probability => {
                let values: Vec<f64> = (0..kernel.size())
                    .map(|i| decision.decision_value(kernel.row(i)))
                    .collect();
                let sigmoid = PlattSigmoid::fit(&values, set.labels());
                if sigmoid.preserves_order() {
                    Some(sigmoid)
                } else {
                    warn!(
                        a = sigmoid.a,
                        b = sigmoid.b,
                        "Platt sigmoid would invert the ranking, scoring with raw decision values"
                    );
                    None
                }
            }
        };

        info!(
            solver = self.solver.name(),
            positives = set.num_positive(),
            negatives = set.num_negative(),
            support_vectors = decision.support_vector_count(),
            positive_weight,
            calibrated = calibration.is_some(),
            "classifier trained"
        );

        Ok(TrainedModel::Classifier {
            training: set.vectors,
            decision,
            calibration,
        })
    }
}
