//! Reeldock API
//!
//! Axum application for the reeldock video service: authenticated video and
//! thumbnail uploads, and playback retrieval with freshly signed URLs.
//! Exposed as a library so integration tests can build the router with test
//! collaborators.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod setup;
pub mod state;
