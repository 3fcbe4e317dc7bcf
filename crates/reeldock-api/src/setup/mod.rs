//! Application wiring: state construction, routes, and server startup.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Context;
use reeldock_core::Config;
use reeldock_media::{FfmpegOptimizer, FfprobeInspector, VideoIngestor};
use reeldock_storage::{LocalAssetStore, ObjectStorage, S3ObjectStore};

use crate::auth::JwtTokenVerifier;
use crate::repository::InMemoryVideoRepository;
use crate::state::AppState;

/// Build the application state with production collaborators.
pub async fn build_state(config: Config) -> Result<Arc<AppState>, anyhow::Error> {
    let storage: Arc<dyn ObjectStorage> = Arc::new(
        S3ObjectStore::new(
            config.s3_bucket.clone(),
            config.s3_region.clone(),
            config.s3_endpoint.clone(),
        )
        .await
        .context("Failed to initialize object storage")?,
    );

    let assets = LocalAssetStore::new(config.assets_root.clone(), config.assets_base_url.clone())
        .await
        .context("Failed to initialize asset store")?;

    let inspector = FfprobeInspector::new(config.ffprobe_path.clone())
        .map_err(|e| anyhow::anyhow!("Invalid ffprobe path: {}", e))?;
    let optimizer = FfmpegOptimizer::new(config.ffmpeg_path.clone())
        .map_err(|e| anyhow::anyhow!("Invalid ffmpeg path: {}", e))?;

    let ingestor = VideoIngestor::new(
        Arc::new(inspector),
        Arc::new(optimizer),
        storage.clone(),
        config.max_video_size_bytes,
    );

    let verifier = Arc::new(JwtTokenVerifier::new(config.jwt_secret.clone()));
    let videos = Arc::new(InMemoryVideoRepository::new());

    Ok(Arc::new(AppState {
        config,
        storage,
        assets,
        videos,
        verifier,
        ingestor,
    }))
}
