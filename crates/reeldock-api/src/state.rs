//! Application state.
//!
//! One immutable state value built at startup and shared via `Arc`. Handlers
//! see only trait objects for the external collaborators (storage, record
//! store, token verification) so tests can swap in fakes.

use std::sync::Arc;
use std::time::Duration;

use reeldock_core::Config;
use reeldock_media::VideoIngestor;
use reeldock_storage::{LocalAssetStore, ObjectStorage};

use crate::auth::TokenVerifier;
use crate::repository::VideoRepository;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
    pub assets: LocalAssetStore,
    pub videos: Arc<dyn VideoRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub ingestor: VideoIngestor,
}

impl AppState {
    /// TTL for signed playback URLs.
    pub fn signed_url_ttl(&self) -> Duration {
        Duration::from_secs(self.config.signed_url_ttl_secs)
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
