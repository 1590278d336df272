//! Name-keyed construction of relevancy index implementations.

use relevancy_core::config::RelevancyConfig;
use relevancy_core::constants::{SVM_HIK_IMPLEMENTATION, SVM_HIK_IMPLEMENTATION_ALIAS};
use relevancy_core::errors::{RelevancyError, RelevancyResult};
use relevancy_core::traits::IRelevancyIndex;

use crate::engine::SvmHikRelevancyIndex;

/// Canonical names accepted by `create_relevancy_index`.
pub fn available_implementations() -> &'static [&'static str] {
    &[SVM_HIK_IMPLEMENTATION]
}

/// Build the implementation registered under `name`.
pub fn create_relevancy_index(
    name: &str,
    config: RelevancyConfig,
) -> RelevancyResult<Box<dyn IRelevancyIndex>> {
    match name {
        SVM_HIK_IMPLEMENTATION | SVM_HIK_IMPLEMENTATION_ALIAS => {
            Ok(Box::new(SvmHikRelevancyIndex::new(config)?))
        }
        other => Err(RelevancyError::UnknownImplementation {
            name: other.to_string(),
        }),
    }
}
