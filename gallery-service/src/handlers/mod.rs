pub mod health;
pub mod images;
pub mod metrics;
pub mod upload;

pub use health::health_check;
pub use images::list_images;
pub use metrics::metrics_endpoint;
pub use upload::upload_image;
