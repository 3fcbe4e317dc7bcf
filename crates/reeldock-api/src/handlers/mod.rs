//! HTTP handlers

pub mod thumbnail_upload;
pub mod video_upload;
pub mod videos;

use axum::extract::Multipart;

use crate::error::HttpAppError;
use crate::state::AppState;
use reeldock_core::models::{Video, VideoResponse};
use reeldock_core::AppError;

/// Extract file data and content type from the named multipart field.
/// Exactly one field with that name is accepted.
pub(crate) async fn extract_multipart_file(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<(Vec<u8>, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if name == field_name {
            if file_data.is_some() {
                return Err(AppError::BadRequest(format!(
                    "Multiple '{}' fields are not allowed; send exactly one",
                    field_name
                )));
            }
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data = file_data.ok_or_else(|| {
        AppError::BadRequest(format!("No '{}' field provided", field_name))
    })?;
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((file_data, content_type))
}

/// Strip media type parameters (e.g. `; codecs=...`) and normalize case.
pub(crate) fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Build the API response for a video, signing the stored reference fresh.
/// Signed URLs are never cached or persisted.
pub(crate) async fn signed_video_response(
    state: &AppState,
    video: Video,
) -> Result<VideoResponse, HttpAppError> {
    let video_url = match video.video_ref {
        Some(ref reference) => Some(
            state
                .storage
                .presign_get(&reference.bucket, &reference.key, state.signed_url_ttl())
                .await
                .map_err(HttpAppError::from)?,
        ),
        None => None,
    };
    Ok(VideoResponse::with_signed_url(video, video_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_strips_parameters() {
        assert_eq!(media_type("video/mp4"), "video/mp4");
        assert_eq!(media_type("Video/MP4; codecs=\"avc1\""), "video/mp4");
        assert_eq!(media_type("  image/jpeg ; q=1"), "image/jpeg");
        assert_eq!(media_type(""), "");
    }
}
