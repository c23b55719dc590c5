//! Client side of the regional photo gallery: region selector, per-region
//! gallery views and the upload form, driven against the gallery service.
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod tabs;

pub use controller::{FetchTicket, GalleryClient};
pub use error::ClientError;
pub use services::gallery_api::{GalleryApi, HttpGalleryApi};
pub use tabs::RegionTabs;
