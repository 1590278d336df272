//! # relevancy-svm
//!
//! Interactive query refinement ranking with a histogram intersection kernel
//! and a binary SVM trained per query.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Validate exemplars | `engine` |
//! | Auto-select negatives when none are given | `negatives` |
//! | Kernel matrix + solver + optional Platt scaling | `training` |
//! | Score every indexed descriptor, sequential or on a worker pool | `scoring` |
//!
//! When no negative can be found the ranking degrades to mean similarity
//! against the positive exemplars instead of failing.

pub mod engine;
pub mod index;
pub mod kernel;
pub mod negatives;
pub mod registry;
pub mod scoring;
pub mod spans;
pub mod training;

pub use engine::SvmHikRelevancyIndex;
pub use index::{DescriptorCache, DescriptorIndex};
pub use negatives::NegativeSelector;
pub use registry::{available_implementations, create_relevancy_index};
pub use scoring::ScoringMode;
pub use training::{ClassifierTrainer, SmoSolver, TrainedModel, TrainingSet};
