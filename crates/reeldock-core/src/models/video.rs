use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::reference::VideoReference;

/// Video metadata record, as kept by the metadata store.
///
/// `video_ref` serializes as the composite `"<bucket>,<key>"` string at the
/// persistence edge; see [`VideoReference`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_ref: Option<VideoReference>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a draft record with no uploaded media yet.
    pub fn new(owner_id: Uuid, title: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            description,
            video_ref: None,
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// API response shape for a video. The stored reference is never exposed;
/// `video_url` carries a freshly signed playback URL instead.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VideoResponse {
    /// Build the response with a signed playback URL (if the video has been
    /// uploaded and signed).
    pub fn with_signed_url(video: Video, video_url: Option<String>) -> Self {
        VideoResponse {
            id: video.id,
            title: video.title,
            description: video.description,
            video_url,
            thumbnail_url: video.thumbnail_url,
            created_at: video.created_at,
        }
    }
}
