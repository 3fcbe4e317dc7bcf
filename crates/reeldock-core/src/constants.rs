//! Shared constants

/// The only content type accepted for video uploads.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Extension used for every stored video object.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Accepted thumbnail content types and the extension each maps to.
pub const THUMBNAIL_CONTENT_TYPES: [(&str, &str); 2] =
    [("image/jpeg", "jpg"), ("image/png", "png")];

/// Map a thumbnail content type to its file extension, if accepted.
pub fn thumbnail_extension(content_type: &str) -> Option<&'static str> {
    THUMBNAIL_CONTENT_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_extension_mapping() {
        assert_eq!(thumbnail_extension("image/jpeg"), Some("jpg"));
        assert_eq!(thumbnail_extension("image/png"), Some("png"));
        assert_eq!(thumbnail_extension("image/gif"), None);
        assert_eq!(thumbnail_extension("video/mp4"), None);
    }
}
