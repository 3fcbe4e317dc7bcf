//! Test helpers: build AppState and router with fake collaborators.
//!
//! The external capabilities (probing, remuxing, object storage, token
//! verification) are replaced with in-process fakes so the end-to-end tests
//! never depend on ffmpeg binaries, S3 credentials, or a signing key.

#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use uuid::Uuid;

use reeldock_api::auth::TokenVerifier;
use reeldock_api::repository::{InMemoryVideoRepository, VideoRepository};
use reeldock_api::setup::routes::setup_routes;
use reeldock_api::state::AppState;
use reeldock_core::models::Video;
use reeldock_core::{AppError, Config};
use reeldock_media::{
    MediaGeometry, MediaInspector, OptimizeError, ProbeError, StreamOptimizer, VideoIngestor,
};
use reeldock_storage::{LocalAssetStore, ObjectStorage, StorageError, StorageResult};

pub const TEST_BUCKET: &str = "test-bucket";
pub const TEST_MAX_VIDEO_BYTES: usize = 1024 * 1024;

/// Verifier accepting tokens that are plain user UUIDs.
pub struct FakeTokenVerifier;

#[async_trait]
impl TokenVerifier for FakeTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(token).map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
    }
}

/// Inspector returning canned geometry (or a canned failure), recording the
/// spool paths it is shown.
pub struct FakeInspector {
    geometry: Mutex<Option<MediaGeometry>>,
    pub seen_paths: Mutex<Vec<PathBuf>>,
}

impl FakeInspector {
    pub fn new() -> Self {
        Self {
            geometry: Mutex::new(Some(MediaGeometry {
                width: 1920,
                height: 1080,
            })),
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn set_geometry(&self, width: u32, height: u32) {
        *self.geometry.lock().unwrap() = Some(MediaGeometry { width, height });
    }

    /// Make subsequent probes fail, as if the tool binary were missing.
    pub fn fail(&self) {
        *self.geometry.lock().unwrap() = None;
    }

    pub fn call_count(&self) -> usize {
        self.seen_paths.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaInspector for FakeInspector {
    async fn inspect(&self, path: &Path) -> Result<MediaGeometry, ProbeError> {
        self.seen_paths.lock().unwrap().push(path.to_path_buf());
        self.geometry
            .lock()
            .unwrap()
            .ok_or_else(|| ProbeError::ExecutionFailed("No such file or directory".to_string()))
    }
}

/// Optimizer that copies the input to a sibling path, recording outputs.
pub struct FakeOptimizer {
    pub produced_paths: Mutex<Vec<PathBuf>>,
}

impl FakeOptimizer {
    pub fn new() -> Self {
        Self {
            produced_paths: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StreamOptimizer for FakeOptimizer {
    async fn optimize(&self, input: &Path) -> Result<PathBuf, OptimizeError> {
        let output = input.with_extension("faststart.mp4");
        std::fs::copy(input, &output)
            .map_err(|e| OptimizeError::ExecutionFailed(e.to_string()))?;
        self.produced_paths.lock().unwrap().push(output.clone());
        Ok(output)
    }
}

/// In-memory object store with deterministic, counter-stamped signed URLs.
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    sign_counter: AtomicU64,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            sign_counter: AtomicU64::new(0),
        }
    }

    pub fn object(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStore {
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, content_type.to_string()));
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        // Counter stands in for the embedded expiry timestamp: every signing
        // call yields a different URL.
        let n = self.sign_counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "https://signed.test/{}/{}?expires={}&sig={}",
            bucket,
            key,
            expires_in.as_secs(),
            n
        ))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn bucket(&self) -> &str {
        TEST_BUCKET
    }
}

/// Test application: server plus handles on every fake collaborator.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub storage: Arc<MemoryObjectStore>,
    pub inspector: Arc<FakeInspector>,
    pub optimizer: Arc<FakeOptimizer>,
    pub repository: Arc<InMemoryVideoRepository>,
    pub _assets_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Seed a video record and return it with a valid bearer token.
    pub async fn seed_video(&self, owner_id: Uuid) -> Video {
        let video = Video::new(owner_id, "Test clip", None);
        self.repository.insert(video.clone()).await.unwrap();
        video
    }

    pub fn assets_path(&self) -> &Path {
        self._assets_dir.path()
    }
}

fn test_config(assets_root: &Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        jwt_secret: "test-secret".to_string(),
        s3_bucket: TEST_BUCKET.to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        max_video_size_bytes: TEST_MAX_VIDEO_BYTES,
        ffmpeg_path: "ffmpeg".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        signed_url_ttl_secs: 3600,
        max_thumbnail_size_bytes: 64 * 1024,
        assets_root: assets_root.to_string_lossy().into_owned(),
        assets_base_url: "http://localhost:4000/assets".to_string(),
    }
}

/// Setup test app with fake collaborators and an isolated assets directory.
pub async fn setup_test_app() -> TestApp {
    let assets_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(assets_dir.path());

    let storage = Arc::new(MemoryObjectStore::new());
    let inspector = Arc::new(FakeInspector::new());
    let optimizer = Arc::new(FakeOptimizer::new());
    let repository = Arc::new(InMemoryVideoRepository::new());

    let assets = LocalAssetStore::new(assets_dir.path(), config.assets_base_url.clone())
        .await
        .expect("Failed to create asset store");

    let ingestor = VideoIngestor::new(
        inspector.clone(),
        optimizer.clone(),
        storage.clone(),
        config.max_video_size_bytes,
    );

    let state = Arc::new(AppState {
        config,
        storage: storage.clone(),
        assets,
        videos: repository.clone(),
        verifier: Arc::new(FakeTokenVerifier),
        ingestor,
    });

    let server = TestServer::new(setup_routes(state.clone())).expect("Failed to start test server");

    TestApp {
        server,
        state,
        storage,
        inspector,
        optimizer,
        repository,
        _assets_dir: assets_dir,
    }
}
