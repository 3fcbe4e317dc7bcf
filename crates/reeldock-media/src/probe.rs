//! Stream geometry probing via ffprobe.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

use crate::error::ProbeError;
use crate::geometry::MediaGeometry;

/// Read-only inspection of a local media file.
#[async_trait]
pub trait MediaInspector: Send + Sync {
    /// Probe the file and return the first stream's geometry. Must not
    /// mutate the input file.
    async fn inspect(&self, path: &Path) -> Result<MediaGeometry, ProbeError>;
}

/// Validate that a tool path doesn't contain shell metacharacters or
/// dangerous sequences.
pub(crate) fn validate_tool_path(path: &str) -> Result<(), String> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(format!("Path contains dangerous characters: {}", path));
    }
    if path.contains("..") {
        return Err(format!("Path contains directory traversal: {}", path));
    }
    Ok(())
}

/// JSON shape of the probe output; only `streams[0]` is consulted.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Production inspector shelling out to ffprobe.
pub struct FfprobeInspector {
    ffprobe_path: String,
}

impl FfprobeInspector {
    pub fn new(ffprobe_path: String) -> Result<Self, ProbeError> {
        validate_tool_path(&ffprobe_path).map_err(ProbeError::ExecutionFailed)?;
        Ok(Self { ffprobe_path })
    }
}

#[async_trait]
impl MediaInspector for FfprobeInspector {
    async fn inspect(&self, path: &Path) -> Result<MediaGeometry, ProbeError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .await
            .map_err(|e| {
                ProbeError::ExecutionFailed(format!("Failed to execute ffprobe: {}", e))
            })?;

        if !output.status.success() {
            return Err(ProbeError::ExecutionFailed(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let probe: ProbeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| ProbeError::InvalidOutput(e.to_string()))?;

        let stream = probe.streams.first().ok_or(ProbeError::NoStreamsFound)?;

        let (width, height) = match (stream.width, stream.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(ProbeError::InvalidOutput(
                    "first stream has no usable width/height".to_string(),
                ))
            }
        };

        tracing::info!(
            path = %path.display(),
            width,
            height,
            duration_ms = start.elapsed().as_millis() as u64,
            "Stream probe completed"
        );

        Ok(MediaGeometry { width, height })
    }
}
