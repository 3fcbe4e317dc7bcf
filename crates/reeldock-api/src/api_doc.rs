//! OpenAPI documentation

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use reeldock_core::models::{Orientation, VideoResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::videos::list_videos,
        crate::handlers::videos::get_video,
        crate::handlers::video_upload::upload_video,
        crate::handlers::thumbnail_upload::upload_thumbnail,
    ),
    components(schemas(VideoResponse, ErrorResponse, Orientation)),
    tags(
        (name = "videos", description = "Video ingestion and playback")
    )
)]
pub struct ApiDoc;
