//! Histogram intersection kernel.
//!
//! `k(a, b) = Σ min(a_i, b_i)`, unnormalized. Bounded by `min(Σa, Σb)` for
//! non-negative inputs, and `k(a, a) == Σa`.

use relevancy_core::errors::{RelevancyError, RelevancyResult};
use relevancy_core::models::KernelMatrix;

/// Intersection mass of two equal-length vectors.
pub fn histogram_intersection(a: &[f64], b: &[f64]) -> RelevancyResult<f64> {
    if a.len() != b.len() {
        return Err(RelevancyError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x.min(*y)).sum())
}

/// Pairwise kernel over a training set.
pub fn kernel_matrix(training: &[&[f64]]) -> RelevancyResult<KernelMatrix> {
    KernelMatrix::from_symmetric_fn(training.len(), |i, j| {
        histogram_intersection(training[i], training[j])
    })
}

/// Kernel values of `query` against every training vector, in training order.
pub fn kernel_row(query: &[f64], training: &[&[f64]]) -> RelevancyResult<Vec<f64>> {
    training
        .iter()
        .map(|t| histogram_intersection(query, t))
        .collect()
}
