use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub storage: StorageConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Flat directory holding every uploaded image; served at `/uploads`.
    pub upload_dir: PathBuf,
    /// Front-end assets served at the root.
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_upload_bytes: usize,
}

impl GalleryConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid MAX_UPLOAD_BYTES {:?}: {}", raw, e))
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(GalleryConfig {
            common,
            storage: StorageConfig {
                upload_dir: get_env("UPLOAD_DIR", "public/uploads").into(),
                public_dir: get_env("PUBLIC_DIR", "public").into(),
            },
            limits: LimitsConfig { max_upload_bytes },
        })
    }

    /// Default port and limits with explicit directories, used by tests.
    pub fn with_dirs(upload_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        GalleryConfig {
            common: core_config::Config::default(),
            storage: StorageConfig {
                upload_dir: upload_dir.into(),
                public_dir: public_dir.into(),
            },
            limits: LimitsConfig {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
