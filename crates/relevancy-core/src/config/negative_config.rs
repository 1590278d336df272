use serde::{Deserialize, Serialize};

/// How negative exemplars are synthesized when a query supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum NegativeSelection {
    /// Pick the descriptors least similar to the positives. Deterministic.
    #[default]
    Farthest,
    /// Uniform sample without replacement, reproducible for a fixed seed.
    Random { seed: u64 },
}

impl NegativeSelection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Farthest => "farthest",
            Self::Random { .. } => "random",
        }
    }
}
