//! Durable storage reference for an uploaded video.
//!
//! `VideoReference` is an explicit (bucket, key) pair everywhere inside the
//! system. The metadata store persists it as a single scalar field, so it
//! serializes to the composite string `"<bucket>,<key>"` at that edge only.
//! Decoding splits on the FIRST comma; bucket names containing a comma are
//! rejected at configuration time.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::AppError;

/// Where a stored video lives: object-store bucket and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub bucket: String,
    pub key: String,
}

impl VideoReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Encode as the composite persistence string `"<bucket>,<key>"`.
    pub fn encode(&self) -> String {
        format!("{},{}", self.bucket, self.key)
    }

    /// Decode a composite string, splitting on the first comma only.
    pub fn decode(composite: &str) -> Result<Self, AppError> {
        let (bucket, key) = composite.split_once(',').ok_or_else(|| {
            AppError::Internal(format!(
                "Malformed video reference (expected '<bucket>,<key>'): {}",
                composite
            ))
        })?;
        if bucket.is_empty() || key.is_empty() {
            return Err(AppError::Internal(format!(
                "Malformed video reference (empty bucket or key): {}",
                composite
            )));
        }
        Ok(Self::new(bucket, key))
    }
}

impl Display for VideoReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for VideoReference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for VideoReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for VideoReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let composite = String::deserialize(deserializer)?;
        VideoReference::decode(&composite).map_err(de::Error::custom)
    }
}
