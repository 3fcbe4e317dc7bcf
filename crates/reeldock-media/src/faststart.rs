//! Fast-start remux optimization via ffmpeg.
//!
//! Copies audio/video streams verbatim into a new mp4 container with the
//! moov atom relocated to the front of the file, so playback can begin
//! before the full file downloads.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::error::OptimizeError;
use crate::probe::validate_tool_path;

/// Produce a streaming-optimized copy of a local media file.
#[async_trait]
pub trait StreamOptimizer: Send + Sync {
    /// Remux the file at `input` into a sibling output file and return its
    /// path. The input file is left untouched; the caller owns cleanup of
    /// both files.
    async fn optimize(&self, input: &Path) -> Result<PathBuf, OptimizeError>;
}

/// Derive the sibling output path for an input file.
fn output_path_for(input: &Path) -> Result<PathBuf, OptimizeError> {
    let mut file_name = input
        .file_name()
        .ok_or_else(|| {
            OptimizeError::ExecutionFailed(format!(
                "Input path has no file name: {}",
                input.display()
            ))
        })?
        .to_os_string();
    file_name.push(".faststart.mp4");
    Ok(input.with_file_name(file_name))
}

/// Production optimizer shelling out to ffmpeg.
pub struct FfmpegOptimizer {
    ffmpeg_path: String,
}

impl FfmpegOptimizer {
    pub fn new(ffmpeg_path: String) -> Result<Self, OptimizeError> {
        validate_tool_path(&ffmpeg_path).map_err(OptimizeError::ExecutionFailed)?;
        Ok(Self { ffmpeg_path })
    }
}

#[async_trait]
impl StreamOptimizer for FfmpegOptimizer {
    async fn optimize(&self, input: &Path) -> Result<PathBuf, OptimizeError> {
        let output_path = output_path_for(input)?;
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output_path)
            .output()
            .await
            .map_err(|e| {
                OptimizeError::ExecutionFailed(format!("Failed to execute ffmpeg: {}", e))
            })?;

        if !output.status.success() {
            return Err(OptimizeError::ExecutionFailed(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fast-start remux completed"
        );

        Ok(output_path)
    }
}
