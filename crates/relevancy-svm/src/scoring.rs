//! Scoring pass over the indexed descriptors.
//!
//! Every descriptor is scored independently against the read-only trained
//! model, so the pass splits into chunks freely. The parallel path runs the
//! chunks on a dedicated rayon pool and merges the partial maps; it yields the
//! same map as the sequential path.

use std::time::Instant;

use rayon::prelude::*;
use relevancy_core::constants::MIN_SCORING_CHUNK;
use relevancy_core::errors::{RelevancyError, RelevancyResult};
use relevancy_core::models::{Descriptor, Ranking};
use tracing::debug;

use crate::training::TrainedModel;

/// How the scoring pass is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    Sequential,
    Parallel { workers: usize },
}

impl ScoringMode {
    /// Parallel with `cores` workers (all available when `None`), or sequential.
    pub fn from_config(multiprocess: bool, cores: Option<usize>) -> Self {
        if multiprocess {
            Self::Parallel {
                workers: cores.unwrap_or_else(rayon::current_num_threads).max(1),
            }
        } else {
            Self::Sequential
        }
    }
}

/// Score every descriptor, keyed by identity.
pub fn score_descriptors(
    descriptors: &[Descriptor],
    model: &TrainedModel<'_>,
    mode: ScoringMode,
) -> RelevancyResult<Ranking> {
    let start = Instant::now();
    let ranking = match mode {
        ScoringMode::Sequential => score_chunk(descriptors, model)?,
        ScoringMode::Parallel { workers } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("relevancy-score-{i}"))
                .build()
                .map_err(|e| RelevancyError::WorkerPool {
                    reason: e.to_string(),
                })?;
            let chunk = chunk_size(descriptors.len(), workers);
            pool.install(|| {
                descriptors
                    .par_chunks(chunk)
                    .map(|c| score_chunk(c, model))
                    .try_reduce(Ranking::new, |mut merged, partial| {
                        merged.extend(partial);
                        Ok(merged)
                    })
            })?
        }
    };

    debug!(
        descriptors = descriptors.len(),
        mode = ?mode,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "index scored"
    );
    Ok(ranking)
}

fn score_chunk(descriptors: &[Descriptor], model: &TrainedModel<'_>) -> RelevancyResult<Ranking> {
    let mut ranking = Ranking::with_capacity(descriptors.len());
    for d in descriptors {
        ranking.insert(d.id().clone(), model.score(d.vector())?);
    }
    Ok(ranking)
}

/// Roughly four chunks per worker, never smaller than `MIN_SCORING_CHUNK`.
fn chunk_size(len: usize, workers: usize) -> usize {
    let target = workers.saturating_mul(4).max(1);
    len.div_ceil(target).max(MIN_SCORING_CHUNK)
}
