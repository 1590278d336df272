//! Least-similar-first selection.

use std::cmp::Ordering;

use relevancy_core::errors::RelevancyResult;
use relevancy_core::models::Descriptor;

use crate::kernel::histogram_intersection;

/// The `wanted` candidates whose strongest intersection with any positive is
/// weakest. Ties keep index order.
pub(super) fn select<'a>(
    candidates: Vec<&'a Descriptor>,
    positives: &[Descriptor],
    wanted: usize,
) -> RelevancyResult<Vec<&'a Descriptor>> {
    let mut scored = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let mut closest = f64::NEG_INFINITY;
        for positive in positives {
            closest = closest.max(histogram_intersection(candidate.vector(), positive.vector())?);
        }
        scored.push((closest, candidate));
    }

    // Stable sort keeps index order among equal similarities.
    scored.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(scored
        .into_iter()
        .take(wanted)
        .map(|(_, d)| d)
        .collect())
}
