//! Reeldock Storage Library
//!
//! Object-storage abstraction and implementations for reeldock: the
//! `ObjectStorage` trait with an S3 backend (uploads and time-bounded signed
//! playback URLs), storage-key derivation for ingested videos, and the local
//! filesystem asset store used for thumbnails.
//!
//! # Video key format
//!
//! `{landscape|portrait|other}/<64 hex chars>.mp4`: an orientation namespace
//! prefix followed by 32 bytes of cryptographically random data. Key
//! derivation is centralized in the `keys` module.

pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use keys::derive_video_key;
pub use local::LocalAssetStore;
pub use s3::S3ObjectStore;
pub use traits::{ObjectStorage, StorageError, StorageResult};
