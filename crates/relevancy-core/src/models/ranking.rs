use std::cmp::Ordering;
use std::collections::HashMap;

use super::DescriptorId;

/// Relevancy score per indexed descriptor. Higher is more relevant.
///
/// Unordered: equal scores are legitimate and no tie-break is implied.
pub type Ranking = HashMap<DescriptorId, f64>;

/// Order a ranking by descending score, breaking ties by ascending identity.
pub fn sort_ranking(ranking: &Ranking) -> Vec<(DescriptorId, f64)> {
    let mut ordered: Vec<(DescriptorId, f64)> =
        ranking.iter().map(|(id, s)| (id.clone(), *s)).collect();
    ordered.sort_by(|(id_a, a), (id_b, b)| {
        b.partial_cmp(a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| id_a.cmp(id_b))
    });
    ordered
}
