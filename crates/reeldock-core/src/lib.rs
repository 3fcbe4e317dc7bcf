//! Reeldock Core Library
//!
//! Shared types for the reeldock video service: the unified error type,
//! process configuration, and the domain models used by the storage, media,
//! and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
