//! Local filesystem asset store for thumbnails.
//!
//! Thumbnails are written unconditionally to `<base_path>/<id>.<ext>` and
//! served as plain static files; no signing, no orientation namespacing.

use crate::traits::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Direct byte store under a local directory, addressed by filename.
#[derive(Clone)]
pub struct LocalAssetStore {
    base_path: PathBuf,
    base_url: String,
}

impl LocalAssetStore {
    /// Create a new LocalAssetStore instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for asset storage (e.g., "assets")
    /// * `base_url` - Base URL the directory is served under
    ///   (e.g., "http://localhost:4000/assets")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create assets directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalAssetStore {
            base_path,
            base_url,
        })
    }

    /// Convert an asset filename to a filesystem path, rejecting anything
    /// that could escape the assets directory.
    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidKey(
                "Asset filename contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(filename))
    }

    /// Write asset bytes, overwriting any previous asset with the same name.
    /// Returns the public URL of the stored asset.
    pub async fn put(&self, filename: &str, data: &[u8]) -> StorageResult<String> {
        let path = self.filename_to_path(filename)?;
        fs::write(&path, data).await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            "Asset stored"
        );

        Ok(self.url_for(filename))
    }

    /// Public URL for an asset filename.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }

    /// Directory the assets live in (for static file serving).
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
