//! Single-file JSON cache for the last news fetch.
//!
//! The file holds one [`CachedNewsPayload`] and is overwritten in full on
//! every write. There is no locking: concurrent writers race and the last
//! one wins.

use std::path::PathBuf;
use log::warn;
use tokio::fs;

use crate::api::models::CachedNewsPayload;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the cached payload.
    ///
    /// A missing, unreadable or malformed file is logged and reported as
    /// `None`, the same as having no cache at all.
    pub async fn read(&self) -> Option<CachedNewsPayload> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read cache file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!("Could not parse cache file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Replaces the file contents with `payload`. Not atomic.
    pub async fn write(&self, payload: &CachedNewsPayload) -> Result<()> {
        let json = serde_json::to_string(payload)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
