//! SvmHikRelevancyIndex, the main entry point for relevancy-svm.
//!
//! Implements `IRelevancyIndex` from relevancy-core: validates the query,
//! auto-selects negatives when none are given, trains a fresh classifier,
//! and scores the whole index.

use std::sync::Arc;

use relevancy_core::config::{ConfigMap, RelevancyConfig};
use relevancy_core::constants::SVM_HIK_IMPLEMENTATION;
use relevancy_core::errors::{RelevancyError, RelevancyResult};
use relevancy_core::models::{Descriptor, Ranking};
use relevancy_core::traits::{IClassifierSolver, IRelevancyIndex};
use tracing::{debug, info};

use crate::index::{DescriptorCache, DescriptorIndex};
use crate::negatives::NegativeSelector;
use crate::scoring::{self, ScoringMode};
use crate::training::{ClassifierTrainer, SmoSolver, TrainingSet};

/// Relevancy index ranking with a histogram intersection kernel SVM.
pub struct SvmHikRelevancyIndex {
    config: RelevancyConfig,
    index: DescriptorIndex,
    cache: Option<DescriptorCache>,
    trainer: ClassifierTrainer,
    selector: NegativeSelector,
}

impl SvmHikRelevancyIndex {
    /// Create with the built-in SMO solver.
    ///
    /// Restores the index from `descr_cache_filepath` when that file exists.
    pub fn new(config: RelevancyConfig) -> RelevancyResult<Self> {
        Self::with_solver(config, Arc::new(SmoSolver::new()))
    }

    /// Create with an injected classifier solver.
    pub fn with_solver(
        config: RelevancyConfig,
        solver: Arc<dyn IClassifierSolver>,
    ) -> RelevancyResult<Self> {
        config.validate()?;

        let cache = config.descr_cache_filepath.as_ref().map(DescriptorCache::new);
        let index = match &cache {
            Some(cache) if cache.exists() => DescriptorIndex::build(cache.load()?)?,
            _ => DescriptorIndex::new(),
        };

        let trainer = ClassifierTrainer::new(solver, config.svm.clone());
        let selector =
            NegativeSelector::new(config.autoneg_select_ratio, config.negative_selection);

        info!(
            solver = trainer.solver_name(),
            restored = index.count(),
            autoneg_select_ratio = config.autoneg_select_ratio,
            multiprocess_fetch = config.multiprocess_fetch,
            "SvmHikRelevancyIndex initialized"
        );

        Ok(Self {
            config,
            index,
            cache,
            trainer,
            selector,
        })
    }

    /// Create from a generic configuration mapping.
    pub fn from_map(map: ConfigMap) -> RelevancyResult<Self> {
        Self::new(RelevancyConfig::from_map(map)?)
    }

    /// Fail fast on empty positives, wrong lengths, or invalid components,
    /// before any kernel evaluation.
    fn validate_query(&self, positives: &[Descriptor], negatives: &[Descriptor]) -> RelevancyResult<()> {
        let Some(first) = positives.first() else {
            return Err(RelevancyError::InvalidQuery {
                reason: "at least one positive exemplar is required".into(),
            });
        };
        let expected = self.index.dimensions().unwrap_or(first.dimensions());
        for exemplar in positives.iter().chain(negatives) {
            exemplar.validate_dimensions(expected)?;
        }
        Ok(())
    }

    fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::from_config(self.config.multiprocess_fetch, self.config.cores)
    }
}

impl IRelevancyIndex for SvmHikRelevancyIndex {
    fn build_index(&mut self, descriptors: Vec<Descriptor>) -> RelevancyResult<()> {
        let index = DescriptorIndex::build(descriptors)?;
        if let Some(cache) = &self.cache {
            cache.save(index.descriptors())?;
        }
        self.index = index;
        info!(
            count = self.index.count(),
            dims = self.index.dimensions().unwrap_or(0),
            "index built"
        );
        Ok(())
    }

    fn count(&self) -> usize {
        self.index.count()
    }

    fn rank(&self, positives: &[Descriptor], negatives: &[Descriptor]) -> RelevancyResult<Ranking> {
        let _span = crate::rank_span!(positives.len(), negatives.len()).entered();
        self.validate_query(positives, negatives)?;

        let negatives: Vec<&Descriptor> = if negatives.is_empty() {
            self.selector.select(&self.index, positives)?
        } else {
            negatives.iter().collect()
        };

        let model = self.trainer.train(TrainingSet::new(positives, &negatives))?;
        let ranking = scoring::score_descriptors(self.index.descriptors(), &model, self.scoring_mode())?;

        debug!(
            scored = ranking.len(),
            degenerate = model.is_degenerate(),
            "rank complete"
        );
        Ok(ranking)
    }

    fn name(&self) -> &str {
        SVM_HIK_IMPLEMENTATION
    }

    fn config(&self) -> &RelevancyConfig {
        &self.config
    }
}
