/// Descriptor cache persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O failed: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cache file is corrupt: {path}: {reason}")]
    Corrupt { path: String, reason: String },
}
