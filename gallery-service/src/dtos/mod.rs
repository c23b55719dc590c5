pub mod images;

pub use images::{UploadResponse, UPLOAD_SUCCESS_MESSAGE};
