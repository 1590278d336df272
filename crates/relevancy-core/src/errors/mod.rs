mod cache_error;
mod relevancy_error;
mod training_error;

pub use cache_error::CacheError;
pub use relevancy_error::{RelevancyError, RelevancyResult};
pub use training_error::TrainingError;
