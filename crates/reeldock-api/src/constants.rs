//! API constants

/// Prefix for all API routes.
pub const API_PREFIX: &str = "/api";

/// Multipart field name carrying the video file.
pub const VIDEO_FIELD: &str = "video";

/// Multipart field name carrying the thumbnail file.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Slack added on top of the video size cap for multipart framing overhead.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;
