//! Surrogate negative exemplars for queries that supply none.
//!
//! Candidates are the indexed descriptors whose identity is not among the
//! positives. At most `ratio × |positives|` are returned; fewer when the
//! index runs short, none when it has nothing left after exclusion.

mod farthest;
mod random;

use std::collections::HashSet;

use relevancy_core::config::NegativeSelection;
use relevancy_core::errors::RelevancyResult;
use relevancy_core::models::{Descriptor, DescriptorId};
use tracing::debug;

use crate::index::DescriptorIndex;

/// Picks negatives from the index according to a configured policy.
#[derive(Debug, Clone, Copy)]
pub struct NegativeSelector {
    ratio: usize,
    policy: NegativeSelection,
}

impl NegativeSelector {
    pub fn new(ratio: usize, policy: NegativeSelection) -> Self {
        Self { ratio, policy }
    }

    /// How many negatives a query with `num_positives` exemplars asks for.
    pub fn requested(&self, num_positives: usize) -> usize {
        self.ratio.saturating_mul(num_positives)
    }

    pub fn select<'a>(
        &self,
        index: &'a DescriptorIndex,
        positives: &[Descriptor],
    ) -> RelevancyResult<Vec<&'a Descriptor>> {
        let excluded: HashSet<&DescriptorId> = positives.iter().map(Descriptor::id).collect();
        let candidates: Vec<&Descriptor> = index
            .iter()
            .filter(|d| !excluded.contains(d.id()))
            .collect();

        let requested = self.requested(positives.len());
        let wanted = requested.min(candidates.len());
        let selected = if wanted == 0 {
            Vec::new()
        } else {
            match self.policy {
                NegativeSelection::Farthest => farthest::select(candidates, positives, wanted)?,
                NegativeSelection::Random { seed } => random::select(candidates, wanted, seed),
            }
        };

        debug!(
            policy = self.policy.name(),
            requested,
            selected = selected.len(),
            "auto-selected negative exemplars"
        );
        Ok(selected)
    }
}
