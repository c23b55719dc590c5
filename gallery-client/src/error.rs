use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// The `message` the server put in its JSON error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
