//! Video metadata record store.
//!
//! The record store is an external collaborator; handlers depend on the
//! [`VideoRepository`] trait only. The in-memory implementation backs local
//! runs and tests. Writes are serialized by the store itself, so concurrent
//! ingestions never share mutable state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use reeldock_core::models::Video;
use reeldock_core::AppError;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Fetch a video record by id.
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Insert a new record.
    async fn insert(&self, video: Video) -> Result<(), AppError>;

    /// Replace an existing record. The record's `updated_at` is refreshed by
    /// the store.
    async fn update(&self, video: Video) -> Result<(), AppError>;

    /// All records owned by a user, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError>;
}

/// In-memory record store.
#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    records: Arc<RwLock<HashMap<Uuid, Video>>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, video: Video) -> Result<(), AppError> {
        self.records.write().await.insert(video.id, video);
        Ok(())
    }

    async fn update(&self, mut video: Video) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&video.id) {
            return Err(AppError::NotFound("Video not found".to_string()));
        }
        video.updated_at = chrono::Utc::now();
        records.insert(video.id, video);
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError> {
        let records = self.records.read().await;
        let mut videos: Vec<Video> = records
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }
}
