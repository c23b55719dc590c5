use serde::{Deserialize, Serialize};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";

/// Body of a `201 Created` answer to `POST /upload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    /// Generated name of the stored file.
    pub file: String,
}

impl UploadResponse {
    pub fn stored(file: String) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            file,
        }
    }
}
