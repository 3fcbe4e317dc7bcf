//! Video ingestion orchestration: spool → inspect → optimize → classify →
//! derive key → upload.
//!
//! The orchestrator owns the temp-file lifecycle for one upload. All
//! request-scoped files live in a per-invocation [`TempDir`], so every exit
//! path (success, validation failure, tool failure, upload failure) releases
//! them when the guard drops. Stages run strictly in sequence; the upload is
//! a single atomic put of the optimized bytes, never attempted before both
//! inspection and optimization have succeeded.

use bytes::Bytes;
use std::sync::Arc;
use tempfile::TempDir;

use reeldock_core::constants::VIDEO_CONTENT_TYPE;
use reeldock_core::models::VideoReference;
use reeldock_storage::{derive_video_key, ObjectStorage};

use crate::error::IngestError;
use crate::faststart::StreamOptimizer;
use crate::probe::MediaInspector;

const SPOOL_FILE_NAME: &str = "upload.mp4";

/// Orchestrates the full ingestion pipeline for one raw upload.
///
/// Identity-agnostic: ownership of the target record is checked by the
/// caller before invoking this, and persisting the returned reference is the
/// caller's job.
pub struct VideoIngestor {
    inspector: Arc<dyn MediaInspector>,
    optimizer: Arc<dyn StreamOptimizer>,
    storage: Arc<dyn ObjectStorage>,
    max_upload_bytes: usize,
}

impl VideoIngestor {
    pub fn new(
        inspector: Arc<dyn MediaInspector>,
        optimizer: Arc<dyn StreamOptimizer>,
        storage: Arc<dyn ObjectStorage>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            inspector,
            optimizer,
            storage,
            max_upload_bytes,
        }
    }

    /// Run the pipeline: validate → spool → inspect → optimize → classify →
    /// derive key → upload. Returns the durable reference on success.
    pub async fn ingest(
        &self,
        data: Bytes,
        declared_content_type: &str,
    ) -> Result<VideoReference, IngestError> {
        if data.len() > self.max_upload_bytes {
            return Err(IngestError::PayloadTooLarge {
                size: data.len(),
                max: self.max_upload_bytes,
            });
        }

        // Media type parameters (e.g. codecs) are ignored for the comparison
        let media_type = declared_content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        if media_type != VIDEO_CONTENT_TYPE {
            return Err(IngestError::UnsupportedMediaType(
                declared_content_type.to_string(),
            ));
        }

        // Scoped spool directory: dropped on every exit path below
        let spool_dir = TempDir::new()?;
        let raw_path = spool_dir.path().join(SPOOL_FILE_NAME);
        tokio::fs::write(&raw_path, &data).await?;

        tracing::debug!(
            path = %raw_path.display(),
            size_bytes = data.len(),
            "Upload spooled to disk"
        );

        let geometry = self.inspector.inspect(&raw_path).await?;
        let optimized_path = self.optimizer.optimize(&raw_path).await?;

        let orientation = geometry.orientation();
        let key = derive_video_key(orientation);

        let optimized_data = tokio::fs::read(&optimized_path).await?;
        self.storage
            .put(&key, optimized_data, VIDEO_CONTENT_TYPE)
            .await?;

        let reference = VideoReference::new(self.storage.bucket(), key);

        tracing::info!(
            width = geometry.width,
            height = geometry.height,
            orientation = %orientation,
            reference = %reference,
            "Video ingested"
        );

        Ok(reference)
    }
}
