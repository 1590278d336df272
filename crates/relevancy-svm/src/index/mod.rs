//! In-memory descriptor collection, replaced wholesale on every build.

mod cache;

pub use cache::DescriptorCache;

use std::collections::HashMap;

use relevancy_core::errors::RelevancyResult;
use relevancy_core::models::{Descriptor, DescriptorId};
use tracing::debug;

/// Identity-keyed descriptor store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorIndex {
    descriptors: Vec<Descriptor>,
    positions: HashMap<DescriptorId, usize>,
}

impl DescriptorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a descriptor sequence.
    ///
    /// All vectors must share one dimensionality and hold finite,
    /// non-negative components. A repeated identity replaces the earlier
    /// descriptor in place.
    pub fn build(descriptors: Vec<Descriptor>) -> RelevancyResult<Self> {
        let expected = descriptors.first().map(Descriptor::dimensions);
        let mut index = Self {
            descriptors: Vec::with_capacity(descriptors.len()),
            positions: HashMap::with_capacity(descriptors.len()),
        };

        for descriptor in descriptors {
            if let Some(dims) = expected {
                descriptor.validate_dimensions(dims)?;
            }
            match index.positions.get(descriptor.id()) {
                Some(&pos) => {
                    debug!(id = %descriptor.id(), "duplicate identity, keeping the later descriptor");
                    index.descriptors[pos] = descriptor;
                }
                None => {
                    index
                        .positions
                        .insert(descriptor.id().clone(), index.descriptors.len());
                    index.descriptors.push(descriptor);
                }
            }
        }
        Ok(index)
    }

    /// Replace the whole content. On error the previous content is kept.
    pub fn replace(&mut self, descriptors: Vec<Descriptor>) -> RelevancyResult<()> {
        *self = Self::build(descriptors)?;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Shared vector length, or `None` while empty.
    pub fn dimensions(&self) -> Option<usize> {
        self.descriptors.first().map(Descriptor::dimensions)
    }

    pub fn get(&self, id: &DescriptorId) -> Option<&Descriptor> {
        self.positions.get(id).map(|&pos| &self.descriptors[pos])
    }

    pub fn contains(&self, id: &DescriptorId) -> bool {
        self.positions.contains_key(id)
    }

    /// Descriptors in insertion order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }
}
