use crate::models::{public_url, Region, StoredImageName};
use anyhow::Context;
use async_trait::async_trait;
use service_core::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Name generation is retried this many times if a generated name is taken.
const MAX_NAME_ATTEMPTS: usize = 5;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Public URLs of every stored image of `region`, in directory order.
    async fn list(&self, region: &Region) -> Result<Vec<String>, AppError>;

    /// Persists `data` under a freshly generated name and returns that name.
    async fn store(
        &self,
        region: &Region,
        original_name: &str,
        data: &[u8],
    ) -> Result<StoredImageName, AppError>;
}

/// Flat directory holding the images of every region.
pub struct LocalImageStore {
    upload_dir: PathBuf,
}

impl LocalImageStore {
    /// Does not touch the file system; the directory is created lazily on
    /// the first upload.
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    async fn write_new(&self, name: &str, data: &[u8]) -> std::io::Result<()> {
        let path = self.upload_dir.join(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(data).await?;
        file.flush().await
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn list(&self, region: &Region) -> Result<Vec<String>, AppError> {
        let mut entries = match fs::read_dir(&self.upload_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context("Failed to read upload directory")
                    .into())
            }
        };

        let mut urls = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read upload directory")?
        {
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if region.owns(&name) {
                urls.push(public_url(&name));
            }
        }

        Ok(urls)
    }

    async fn store(
        &self,
        region: &Region,
        original_name: &str,
        data: &[u8],
    ) -> Result<StoredImageName, AppError> {
        fs::create_dir_all(&self.upload_dir).await.with_context(|| {
            format!(
                "Failed to create upload directory {}",
                self.upload_dir.display()
            )
        })?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = StoredImageName::generate(region, original_name);
            match self.write_new(&name.to_string(), data).await {
                Ok(()) => return Ok(name),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::warn!(file = %name, "Generated image name already taken, retrying");
                }
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("Failed to write image {}", name))
                        .into())
                }
            }
        }

        Err(AppError::InternalError(anyhow::anyhow!(
            "Could not find a free file name for region {}",
            region
        )))
    }
}
