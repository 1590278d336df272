// Single source of truth for all default values.

// --- Index ---
pub const DEFAULT_AUTONEG_SELECT_RATIO: usize = 1;
pub const DEFAULT_MULTIPROCESS_FETCH: bool = false;

// --- Negative selection ---
pub const DEFAULT_NEGATIVE_SEED: u64 = 0;

// --- SVM ---
pub const DEFAULT_SVM_C: f64 = 2.0;
pub const DEFAULT_POSITIVE_WEIGHT: f64 = 1.0;
pub const DEFAULT_NEGATIVE_WEIGHT: f64 = 1.0;
pub const DEFAULT_AUTO_POSITIVE_WEIGHT: bool = true;
pub const DEFAULT_SVM_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_SVM_MAX_ITERATIONS: usize = 100_000;
