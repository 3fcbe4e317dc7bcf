//! Video upload handler: runs the ingestion pipeline and persists the
//! resulting storage reference against the target record.

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::constants::VIDEO_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::{extract_multipart_file, signed_video_response};
use crate::state::AppState;
use reeldock_core::models::VideoResponse;
use reeldock_core::AppError;

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/upload",
    tag = "videos",
    params(
        ("video_id" = Uuid, Path, description = "Target video record ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video ingested", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Video record not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported media type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(video_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    // Ownership is a precondition of ingestion; the pipeline itself is
    // identity-agnostic.
    let mut video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != user_id {
        return Err(AppError::Unauthorized("You do not own this video".to_string()).into());
    }

    let (data, content_type) = extract_multipart_file(multipart, VIDEO_FIELD).await?;

    let reference = state
        .ingestor
        .ingest(Bytes::from(data), &content_type)
        .await?;

    video.video_ref = Some(reference.clone());
    if let Err(e) = state.videos.update(video.clone()).await {
        // The object is already durable; compensate so a failed record
        // update doesn't leak an unreachable upload.
        if let Err(cleanup_err) = state.storage.delete(&reference.key).await {
            tracing::warn!(
                error = %cleanup_err,
                key = %reference.key,
                "Failed to clean up stored object after record update error"
            );
        }
        return Err(e.into());
    }

    tracing::info!(
        video_id = %video_id,
        owner_id = %user_id,
        reference = %reference,
        "Video uploaded"
    );

    let response = signed_video_response(&state, video).await?;
    Ok(Json(response))
}
