//! JSON persistence of the indexed descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use relevancy_core::errors::{CacheError, RelevancyResult};
use relevancy_core::models::Descriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CACHE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct CacheFileRef<'a> {
    version: u32,
    descriptors: &'a [Descriptor],
}

#[derive(Deserialize)]
struct CacheFile {
    version: u32,
    descriptors: Vec<Descriptor>,
}

/// Descriptor cache file at a fixed path.
#[derive(Debug, Clone)]
pub struct DescriptorCache {
    path: PathBuf,
}

impl DescriptorCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every cached descriptor.
    pub fn load(&self) -> RelevancyResult<Vec<Descriptor>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let file: CacheFile =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        if file.version != CACHE_FORMAT_VERSION {
            return Err(self.corrupt(format!(
                "unsupported format version {} (expected {CACHE_FORMAT_VERSION})",
                file.version
            ))
            .into());
        }
        debug!(path = %self.path.display(), count = file.descriptors.len(), "descriptor cache loaded");
        Ok(file.descriptors)
    }

    /// Overwrite the cache with `descriptors`.
    ///
    /// Writes a sibling temp file first and renames it over the target, so a
    /// reader never sees a half-written cache.
    pub fn save(&self, descriptors: &[Descriptor]) -> RelevancyResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string(&CacheFileRef {
            version: CACHE_FORMAT_VERSION,
            descriptors,
        })
        .map_err(|e| self.corrupt(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), count = descriptors.len(), "descriptor cache saved");
        Ok(())
    }

    fn io_error(&self, e: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }

    fn corrupt(&self, reason: String) -> CacheError {
        CacheError::Corrupt {
            path: self.path.display().to_string(),
            reason,
        }
    }
}
