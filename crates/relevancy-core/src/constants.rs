/// Registry name of the SVM + histogram intersection ranking implementation.
pub const SVM_HIK_IMPLEMENTATION: &str = "svm_hik";

/// Alternate registry name accepted for the SVM + histogram intersection implementation.
pub const SVM_HIK_IMPLEMENTATION_ALIAS: &str = "libsvm_hik";

/// Minimum number of descriptors per worker chunk in the parallel scoring pass.
pub const MIN_SCORING_CHUNK: usize = 64;

/// Lower bound for a non-positive curvature term in the SMO update.
pub const SMO_TAU: f64 = 1e-12;
