/// Classifier training errors.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("solver produced an empty model (no support vectors)")]
    EmptyModel,

    #[error("training set contains a single class: {label}")]
    SingleClass { label: String },

    #[error("kernel matrix is {matrix}x{matrix} but {labels} labels were given")]
    SizeMismatch { matrix: usize, labels: usize },

    #[error("solver failed: {reason}")]
    SolverFailed { reason: String },
}
