use relevancy_core::errors::*;

#[test]
fn invalid_query_carries_reason() {
    let err = RelevancyError::InvalidQuery {
        reason: "no positive exemplars".into(),
    };
    assert!(err.to_string().contains("no positive exemplars"));
    assert!(err.is_invalid_input());
}

#[test]
fn dimension_mismatch_carries_values() {
    let err = RelevancyError::DimensionMismatch {
        expected: 5,
        actual: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains('5'));
    assert!(msg.contains('3'));
    assert!(err.is_invalid_input());
}

#[test]
fn worker_pool_is_not_an_input_error() {
    let err = RelevancyError::WorkerPool {
        reason: "spawn failed".into(),
    };
    assert!(!err.is_invalid_input());
}

// --- From impls ---

#[test]
fn training_error_converts_to_relevancy_error() {
    let err: RelevancyError = TrainingError::EmptyModel.into();
    assert!(matches!(err, RelevancyError::Training(TrainingError::EmptyModel)));
    assert!(err.to_string().contains("no support vectors"));
}

#[test]
fn cache_error_converts_to_relevancy_error() {
    let err: RelevancyError = CacheError::Corrupt {
        path: "/tmp/x.json".into(),
        reason: "eof".into(),
    }
    .into();
    assert!(matches!(err, RelevancyError::Cache(_)));
    assert!(err.to_string().contains("/tmp/x.json"));
}

#[test]
fn size_mismatch_reports_both_sizes() {
    let err = TrainingError::SizeMismatch {
        matrix: 4,
        labels: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("4x4"));
    assert!(msg.contains('3'));
}
