//! Thumbnail upload handler: a direct byte write keyed by id + extension.
//! Thumbnails are never signed or orientation-namespaced.

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::constants::THUMBNAIL_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::{extract_multipart_file, media_type, signed_video_response};
use crate::state::AppState;
use reeldock_core::constants::thumbnail_extension;
use reeldock_core::models::VideoResponse;
use reeldock_core::AppError;

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/thumbnail",
    tag = "videos",
    params(
        ("video_id" = Uuid, Path, description = "Target video record ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video record not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported media type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(video_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != user_id {
        return Err(AppError::Unauthorized("You do not own this video".to_string()).into());
    }

    let (data, content_type) = extract_multipart_file(multipart, THUMBNAIL_FIELD).await?;

    if data.len() > state.config.max_thumbnail_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{} bytes exceeds max {} bytes",
            data.len(),
            state.config.max_thumbnail_size_bytes
        ))
        .into());
    }

    let extension = thumbnail_extension(&media_type(&content_type)).ok_or_else(|| {
        AppError::UnsupportedMediaType(format!(
            "'{}' is not accepted; upload image/jpeg or image/png",
            content_type
        ))
    })?;

    let filename = format!("{}.{}", video_id, extension);
    let thumbnail_url = state.assets.put(&filename, &data).await?;

    video.thumbnail_url = Some(thumbnail_url.clone());
    state.videos.update(video.clone()).await?;

    tracing::info!(
        video_id = %video_id,
        owner_id = %user_id,
        thumbnail_url = %thumbnail_url,
        "Thumbnail uploaded"
    );

    let response = signed_video_response(&state, video).await?;
    Ok(Json(response))
}
