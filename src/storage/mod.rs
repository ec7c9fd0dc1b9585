// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::mbnet::models::DrawRecord;
use crate::utils::error::StorageError;

/// One cached archive per calendar day of download. A file present for today
/// short-circuits the network fetch entirely; the cache never expires within
/// a day and is never invalidated.
pub struct CacheManager {
    base_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager rooted at the given directory, creating the
    /// directory first if it does not exist.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::Io)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Path of the archive downloaded on `date`, e.g. `2026-08-04-dl.txt`.
    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        self.base_dir
            .join(format!("{}-dl.txt", date.format("%Y-%m-%d")))
    }

    /// Returns the cached archive for `date`, or `None` when none was saved yet.
    pub fn load_archive(&self, date: NaiveDate) -> Result<Option<String>, StorageError> {
        let path = self.archive_path(date);

        if !path.exists() {
            tracing::info!("No cached archive at {}", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        tracing::info!("Reusing cached archive at {}", path.display());

        Ok(Some(contents))
    }

    /// Saves a freshly downloaded archive under `date`'s cache name.
    pub fn save_archive(&self, date: NaiveDate, contents: &str) -> Result<PathBuf, StorageError> {
        let path = self.archive_path(date);

        fs::write(&path, contents)?;
        tracing::info!("Saved archive to {}", path.display());

        Ok(path)
    }

    /// Saves a JSON sidecar describing a downloaded archive, next to the
    /// archive itself.
    pub fn save_archive_metadata(
        &self,
        date: NaiveDate,
        url: &str,
        content_length: usize,
        draws: &[DrawRecord],
    ) -> Result<PathBuf, StorageError> {
        let path = self
            .base_dir
            .join(format!("{}-dl.meta.json", date.format("%Y-%m-%d")));

        let metadata = serde_json::json!({
            "source_url": url,
            "downloaded_on": date,
            "content_length": content_length,
            "draw_count": draws.len(),
            "latest_draw": draws.last(),
            "fetch_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&path, metadata_str)?;
        tracing::info!("Saved archive metadata to {}", path.display());

        Ok(path)
    }
}
