pub mod defaults;
mod negative_config;
mod svm_config;

pub use negative_config::NegativeSelection;
pub use svm_config::{ScoreMode, SvmConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{RelevancyError, RelevancyResult};

/// Generic key-value form of a configuration.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Configuration of a relevancy index instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevancyConfig {
    /// Where the indexed descriptors are persisted and restored from.
    pub descr_cache_filepath: Option<String>,
    /// Negatives synthesized per positive exemplar when a query has none.
    pub autoneg_select_ratio: usize,
    /// Score the index on a worker pool instead of sequentially.
    pub multiprocess_fetch: bool,
    /// Worker count for the parallel pass. `None` uses every available core.
    pub cores: Option<usize>,
    pub negative_selection: NegativeSelection,
    pub svm: SvmConfig,
}

impl Default for RelevancyConfig {
    fn default() -> Self {
        Self {
            descr_cache_filepath: None,
            autoneg_select_ratio: defaults::DEFAULT_AUTONEG_SELECT_RATIO,
            multiprocess_fetch: defaults::DEFAULT_MULTIPROCESS_FETCH,
            cores: None,
            negative_selection: NegativeSelection::default(),
            svm: SvmConfig::default(),
        }
    }
}

impl RelevancyConfig {
    /// Parse from TOML. Missing fields keep their defaults.
    pub fn from_toml(input: &str) -> RelevancyResult<Self> {
        toml::from_str(input).map_err(|e| RelevancyError::InvalidConfig {
            field: "toml".into(),
            reason: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> RelevancyResult<String> {
        toml::to_string(self).map_err(|e| RelevancyError::InvalidConfig {
            field: "toml".into(),
            reason: e.to_string(),
        })
    }

    /// Construct from a generic configuration mapping. Missing keys keep their defaults.
    pub fn from_map(map: ConfigMap) -> RelevancyResult<Self> {
        serde_json::from_value(serde_json::Value::Object(map)).map_err(|e| {
            RelevancyError::InvalidConfig {
                field: "map".into(),
                reason: e.to_string(),
            }
        })
    }

    /// Export as a generic configuration mapping; `from_map` of the result
    /// reproduces this config.
    pub fn to_map(&self) -> RelevancyResult<ConfigMap> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(RelevancyError::InvalidConfig {
                field: "map".into(),
                reason: format!("expected an object, got {other}"),
            }),
            Err(e) => Err(RelevancyError::InvalidConfig {
                field: "map".into(),
                reason: e.to_string(),
            }),
        }
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> RelevancyResult<()> {
        if self.cores == Some(0) {
            return Err(invalid("cores", "must be a positive integer"));
        }
        let svm = &self.svm;
        if !(svm.c.is_finite() && svm.c > 0.0) {
            return Err(invalid("svm.c", "must be finite and > 0"));
        }
        if !(svm.positive_weight.is_finite() && svm.positive_weight > 0.0) {
            return Err(invalid("svm.positive_weight", "must be finite and > 0"));
        }
        if !(svm.negative_weight.is_finite() && svm.negative_weight > 0.0) {
            return Err(invalid("svm.negative_weight", "must be finite and > 0"));
        }
        if !(svm.tolerance.is_finite() && svm.tolerance > 0.0) {
            return Err(invalid("svm.tolerance", "must be finite and > 0"));
        }
        if svm.max_iterations == 0 {
            return Err(invalid("svm.max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> RelevancyError {
    RelevancyError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
