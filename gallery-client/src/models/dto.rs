use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
