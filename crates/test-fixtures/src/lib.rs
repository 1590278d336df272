//! Test fixture loader for relevancy golden scenarios and benchmarks.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! building synthetic descriptor collections in tests across crates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relevancy_core::models::{Descriptor, DescriptorId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A ranking scenario with known outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct IqrScenario {
    pub description: String,
    pub index: Vec<Descriptor>,
    pub positives: Vec<Descriptor>,
    pub negatives: Vec<Descriptor>,
    /// Index sequence numbers grouped by expected rank, best first.
    /// Members of one tier score equally.
    pub expected_tiers: Vec<Vec<u64>>,
}

/// The five-axis scenario: unit vectors, one two-axis mixture, one uniform mixture.
pub fn axis_scenario() -> IqrScenario {
    load_fixture("golden/iqr/axis_scenario.json")
}

/// `count` pseudo-random non-negative vectors of length `dims`, reproducible
/// for a given `seed`. Each vector sums to 1.
pub fn synthetic_descriptors(namespace: &str, count: usize, dims: usize, seed: u64) -> Vec<Descriptor> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let raw: Vec<f64> = (0..dims).map(|_| rng.random::<f64>()).collect();
            let total: f64 = raw.iter().sum::<f64>().max(f64::EPSILON);
            let vector = raw.into_iter().map(|v| v / total).collect();
            Descriptor::new(DescriptorId::new(namespace, i as u64), vector)
        })
        .collect()
}
