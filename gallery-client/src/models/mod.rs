pub mod dto;
pub mod gallery;
pub mod upload;

pub use dto::{ErrorBody, UploadResponse};
pub use gallery::{GalleryImage, GalleryView};
pub use upload::{ImageFile, StatusTone, UploadForm, UploadStatus};
