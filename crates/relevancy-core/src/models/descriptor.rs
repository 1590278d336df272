use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RelevancyError, RelevancyResult};

/// Identity of a descriptor: a (namespace, sequence number) pair.
///
/// Used as the key of every ranking result. Two descriptors with identical
/// vectors are still distinct if their identities differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DescriptorId {
    pub namespace: String,
    pub seq: u64,
}

impl DescriptorId {
    pub fn new(namespace: impl Into<String>, seq: u64) -> Self {
        Self {
            namespace: namespace.into(),
            seq,
        }
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.seq)
    }
}

/// A feature vector of non-negative reals plus its identity.
///
/// The vector is fixed at construction; nothing in the ranking path mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    id: DescriptorId,
    vector: Vec<f64>,
}

impl Descriptor {
    pub fn new(id: DescriptorId, vector: Vec<f64>) -> Self {
        Self { id, vector }
    }

    pub fn id(&self) -> &DescriptorId {
        &self.id
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }

    /// Check that every component is finite and non-negative.
    pub fn validate(&self) -> RelevancyResult<()> {
        if let Some((i, v)) = self
            .vector
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(RelevancyError::InvalidVector {
                id: self.id.to_string(),
                reason: format!("component {i} is {v}, expected a finite non-negative value"),
            });
        }
        Ok(())
    }

    /// Check length against an expected dimensionality, then validate components.
    pub fn validate_dimensions(&self, expected: usize) -> RelevancyResult<()> {
        if self.vector.len() != expected {
            return Err(RelevancyError::DimensionMismatch {
                expected,
                actual: self.vector.len(),
            });
        }
        self.validate()
    }
}
