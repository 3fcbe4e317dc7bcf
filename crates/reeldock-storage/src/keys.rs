//! Storage key derivation for ingested videos.
//!
//! Key format: `{landscape|portrait|other}/<64 hex chars>.mp4`. The suffix is
//! 32 bytes from a cryptographically secure source, so uniqueness is
//! probabilistic with 256 bits of entropy; keys are never reused.

use rand::RngCore;
use reeldock_core::constants::VIDEO_EXTENSION;
use reeldock_core::models::Orientation;

/// Derive a fresh, orientation-namespaced storage key for a video object.
///
/// Infallible: random-source failure aborts the process rather than being
/// surfaced as a recoverable error.
pub fn derive_video_key(orientation: Orientation) -> String {
    let mut suffix = [0u8; 32];
    rand::rng().fill_bytes(&mut suffix);
    format!(
        "{}{}.{}",
        orientation.prefix(),
        hex::encode(suffix),
        VIDEO_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_shape() {
        let key = derive_video_key(Orientation::Landscape);
        assert!(key.starts_with("landscape/"));
        assert!(key.ends_with(".mp4"));
        // prefix + 64 hex chars + ".mp4"
        let hex_part = &key["landscape/".len()..key.len() - ".mp4".len()];
        assert_eq!(hex_part.len(), 64);
        assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_prefix_follows_orientation() {
        assert!(derive_video_key(Orientation::Portrait).starts_with("portrait/"));
        assert!(derive_video_key(Orientation::Other).starts_with("other/"));
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let key = derive_video_key(Orientation::Other);
            assert!(key.starts_with("other/"));
            assert!(key.ends_with(".mp4"));
            assert!(seen.insert(key), "derived key collided");
        }
    }
}
