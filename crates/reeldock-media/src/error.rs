//! Ingestion pipeline errors.
//!
//! Each external capability has its own error type; `IngestError` unifies
//! them for the orchestrator. The API layer maps these onto the application
//! error taxonomy (client input vs. dependency failure).

use reeldock_storage::StorageError;
use thiserror::Error;

/// Stream probing errors
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Probe execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Unparseable probe output: {0}")]
    InvalidOutput(String),

    #[error("No streams found")]
    NoStreamsFound,
}

/// Fast-start remux errors
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Remux execution failed: {0}")]
    ExecutionFailed(String),
}

/// Ingestion orchestrator errors
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Payload of {size} bytes exceeds maximum of {max} bytes")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inspection failed: {0}")]
    Inspection(#[from] ProbeError),

    #[error("Optimization failed: {0}")]
    Optimization(#[from] OptimizeError),

    #[error("Storage upload failed: {0}")]
    Upload(#[from] StorageError),
}
