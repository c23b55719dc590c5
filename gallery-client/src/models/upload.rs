use crate::error::ClientError;
use std::path::Path;

pub const UPLOADING_MESSAGE: &str = "Uploading, please wait...";
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed due to a server error.";

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Reads a file from disk, guessing its content type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok(Self::new(file_name, content_type, data))
    }
}

/// The upload form: a region selector and a file input.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub region: String,
    pub file: Option<ImageFile>,
    default_region: String,
}

impl UploadForm {
    pub fn new(default_region: impl Into<String>) -> Self {
        let default_region = default_region.into();
        Self {
            region: default_region.clone(),
            file: None,
            default_region,
        }
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn set_file(&mut self, file: ImageFile) {
        self.file = Some(file);
    }

    /// Back to the initial region with no file chosen.
    pub fn reset(&mut self) {
        self.region = self.default_region.clone();
        self.file = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// Status line under the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    InProgress,
    Succeeded(String),
    Failed(String),
}

impl UploadStatus {
    pub fn failed(err: &ClientError) -> Self {
        let message = match err {
            ClientError::Status { .. } => err
                .server_message()
                .unwrap_or(GENERIC_UPLOAD_ERROR)
                .to_string(),
            other => other.to_string(),
        };
        UploadStatus::Failed(message)
    }

    pub fn text(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::InProgress => UPLOADING_MESSAGE.to_string(),
            UploadStatus::Succeeded(message) => message.clone(),
            UploadStatus::Failed(message) => format!("Error: {}", message),
        }
    }

    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::InProgress => Some(StatusTone::Info),
            UploadStatus::Succeeded(_) => Some(StatusTone::Success),
            UploadStatus::Failed(_) => Some(StatusTone::Error),
        }
    }
}
