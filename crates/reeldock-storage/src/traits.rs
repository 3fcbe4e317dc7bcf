//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait implemented by the S3 backend
//! and by test doubles.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable object storage with signed retrieval.
///
/// `put` is a single atomic write to the backend's configured bucket; the
/// caller sees either a stored object or an error, never partial state.
/// `presign_get` takes the bucket explicitly so references persisted against
/// a historical bucket keep signing correctly.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object to the configured bucket under the given key.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// Generate a presigned GET URL valid for `expires_in` from now.
    ///
    /// The URL embeds an expiry timestamp, so two calls separated in time
    /// produce different URLs. Callers must not cache it beyond the TTL.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Delete an object from the configured bucket (compensating cleanup).
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// The bucket new uploads are written to.
    fn bucket(&self) -> &str;
}
