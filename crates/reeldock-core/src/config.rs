//! Configuration module
//!
//! Process-wide configuration loaded once at startup and injected into the
//! application state as an immutable value. Nothing in the pipeline reads
//! ambient environment state after construction, so concurrent tests can run
//! with independent configurations.

use std::env;

const SERVER_PORT: u16 = 4000;
const MAX_VIDEO_SIZE_MB: usize = 1024; // 1 GiB hard cap
const MAX_THUMBNAIL_SIZE_MB: usize = 10;
const SIGNED_URL_TTL_SECS: u64 = 3600;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub jwt_secret: String,
    // Object storage
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    // Video ingestion
    pub max_video_size_bytes: usize,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub signed_url_ttl_secs: u64,
    // Thumbnail assets
    pub max_thumbnail_size_bytes: usize,
    pub assets_root: String,
    pub assets_base_url: String,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
            || self.environment.to_lowercase() == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| SERVER_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let assets_base_url = env::var("ASSETS_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/assets", server_port));

        let config = Config {
            server_port,
            environment,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            s3_bucket: env::var("S3_BUCKET")
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            max_video_size_bytes: env::var("MAX_VIDEO_SIZE_MB")
                .unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_VIDEO_SIZE_MB)
                * 1024
                * 1024,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            signed_url_ttl_secs: env::var("SIGNED_URL_TTL_SECS")
                .unwrap_or_else(|_| SIGNED_URL_TTL_SECS.to_string())
                .parse()
                .unwrap_or(SIGNED_URL_TTL_SECS),
            max_thumbnail_size_bytes: env::var("MAX_THUMBNAIL_SIZE_MB")
                .unwrap_or_else(|_| MAX_THUMBNAIL_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(MAX_THUMBNAIL_SIZE_MB)
                * 1024
                * 1024,
            assets_root: env::var("ASSETS_ROOT").unwrap_or_else(|_| "assets".to_string()),
            assets_base_url,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants that cannot be expressed in types.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.s3_bucket.is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET must not be empty"));
        }
        // Stored references encode "<bucket>,<key>" and are split on the
        // first comma; a comma in the bucket name would corrupt every
        // persisted reference.
        if self.s3_bucket.contains(',') {
            return Err(anyhow::anyhow!(
                "S3_BUCKET must not contain ',' (reserved as the reference separator)"
            ));
        }
        if self.max_video_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_VIDEO_SIZE_MB must be greater than 0"));
        }
        if self.signed_url_ttl_secs == 0 {
            return Err(anyhow::anyhow!("SIGNED_URL_TTL_SECS must be greater than 0"));
        }
        if self.is_production() && self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 bytes in production"
            ));
        }
        Ok(())
    }
}
