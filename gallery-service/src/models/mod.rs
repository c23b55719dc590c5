pub mod region;
pub mod stored_image;

pub use region::Region;
pub use stored_image::{public_url, sanitize_original_name, StoredImageName, UPLOADS_URL_PREFIX};
