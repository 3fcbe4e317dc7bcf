//! Stream geometry extracted by probing.

use reeldock_core::models::Orientation;

/// Width and height of a media stream, in pixels. Derived read-only from
/// probing; both values are always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaGeometry {
    pub width: u32,
    pub height: u32,
}

impl MediaGeometry {
    /// Orientation bucket for this geometry.
    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_delegates_to_classifier() {
        let geometry = MediaGeometry {
            width: 1920,
            height: 1080,
        };
        assert_eq!(geometry.orientation(), Orientation::Landscape);
    }
}
