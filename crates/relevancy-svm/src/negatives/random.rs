//! Seeded uniform sampling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use relevancy_core::models::Descriptor;

/// `wanted` distinct candidates drawn uniformly; identical for identical seeds.
pub(super) fn select<'a>(
    candidates: Vec<&'a Descriptor>,
    wanted: usize,
    seed: u64,
) -> Vec<&'a Descriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, candidates.len(), wanted)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}
