//! Frame-geometry orientation classification.
//!
//! Buckets a video's frame geometry into landscape/portrait/other from its
//! aspect ratio. The ratio is rounded to 3 decimal places (half away from
//! zero) and compared by exact equality against the same rounding of 16/9 and
//! 9/16, so borderline ratios classify deterministically.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Other,
}

/// Round to 3 decimal places, half away from zero (`f64::round` semantics).
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Orientation {
    /// Classify a frame geometry. Total and deterministic; every positive
    /// width/height pair maps to exactly one variant.
    pub fn classify(width: u32, height: u32) -> Self {
        let ratio = round3(width as f64 / height as f64);
        if ratio == round3(16.0 / 9.0) {
            Orientation::Landscape
        } else if ratio == round3(9.0 / 16.0) {
            Orientation::Portrait
        } else {
            Orientation::Other
        }
    }

    /// Storage key namespace prefix for this orientation.
    pub fn prefix(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape/",
            Orientation::Portrait => "portrait/",
            Orientation::Other => "other/",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Other => write!(f, "other"),
        }
    }
}
