use crate::config::RelevancyConfig;
use crate::errors::RelevancyResult;
use crate::models::{Descriptor, Ranking};

/// A relevancy ranking capability over a fixed descriptor collection.
///
/// Each concrete kernel/solver pairing is one implementation.
pub trait IRelevancyIndex: Send + Sync {
    /// Replace the indexed descriptors with `descriptors`.
    fn build_index(&mut self, descriptors: Vec<Descriptor>) -> RelevancyResult<()>;

    /// Number of descriptors currently indexed.
    fn count(&self) -> usize;

    /// Score every indexed descriptor by relevance to `positives` and away
    /// from `negatives`. Fails when `positives` is empty.
    fn rank(&self, positives: &[Descriptor], negatives: &[Descriptor]) -> RelevancyResult<Ranking>;

    /// Registry name of this implementation.
    fn name(&self) -> &str;

    /// Configuration this instance was built from.
    fn config(&self) -> &RelevancyConfig;
}
