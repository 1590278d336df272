use super::{CacheError, TrainingError};

/// Convenience alias used by every fallible operation in the workspace.
pub type RelevancyResult<T> = Result<T, RelevancyError>;

/// Top-level error for indexing and ranking.
#[derive(Debug, thiserror::Error)]
pub enum RelevancyError {
    /// The refinement query cannot be served as given (e.g. no positive exemplars).
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid vector for descriptor {id}: {reason}")]
    InvalidVector { id: String, reason: String },

    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("unknown relevancy index implementation: {name}")]
    UnknownImplementation { name: String },

    #[error("worker pool failed: {reason}")]
    WorkerPool { reason: String },

    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl RelevancyError {
    /// Whether this error is a caller-input validation failure (the
    /// "value error" class), as opposed to a computational or I/O failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery { .. }
                | Self::DimensionMismatch { .. }
                | Self::InvalidVector { .. }
                | Self::InvalidConfig { .. }
        )
    }
}
