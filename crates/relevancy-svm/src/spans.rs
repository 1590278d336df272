//! Span definitions for the ranking pipeline.
//!
//! Each span carries the training-set shape via the `tracing` crate.

/// Create a ranking span.
#[macro_export]
macro_rules! rank_span {
    ($positives:expr, $negatives:expr) => {
        tracing::info_span!("relevancy.rank", positives = $positives, negatives = $negatives)
    };
}

/// Create a training span.
#[macro_export]
macro_rules! train_span {
    ($positives:expr, $negatives:expr) => {
        tracing::info_span!("relevancy.train", positives = $positives, negatives = $negatives)
    };
}
