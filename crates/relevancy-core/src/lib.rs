//! # relevancy-core
//!
//! Foundation crate for interactive query refinement (IQR) ranking.
//! Defines descriptor types, capability traits, errors, config, and constants.
//! Every ranking implementation in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RelevancyConfig;
pub use errors::{RelevancyError, RelevancyResult};
pub use models::{Descriptor, DescriptorId, KernelMatrix, Label, Ranking};
