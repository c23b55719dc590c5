use crate::models::Region;
use rand::Rng;
use std::fmt;
use std::path::Path;

/// URL path under which the upload directory is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const MAX_RANDOM_SUFFIX: u64 = 1_000_000_000;
const UNNAMED: &str = "unnamed";

/// Name of an image on disk:
/// `{region}-{timestamp_ms}-{random}-{sanitized original name}`.
///
/// The name is the only metadata kept for a stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImageName {
    pub region: Region,
    pub timestamp_ms: i64,
    pub suffix: u64,
    pub original_name: String,
}

impl StoredImageName {
    pub fn generate(region: &Region, original_name: &str) -> Self {
        Self {
            region: region.clone(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            suffix: rand::thread_rng().gen_range(0..=MAX_RANDOM_SUFFIX),
            original_name: sanitize_original_name(original_name),
        }
    }

    pub fn public_url(&self) -> String {
        public_url(&self.to_string())
    }
}

impl fmt::Display for StoredImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.region, self.timestamp_ms, self.suffix, self.original_name
        )
    }
}

/// Keeps the last path component of a client file name and collapses every
/// run of whitespace into a single `-`.
pub fn sanitize_original_name(original_name: &str) -> String {
    let base = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    // Windows clients may send backslash-separated paths.
    let base = base.rsplit('\\').next().unwrap_or(base);

    let collapsed = base.split_whitespace().collect::<Vec<_>>().join("-");
    let mut sanitized = String::with_capacity(base.len());
    if base.starts_with(char::is_whitespace) && !collapsed.is_empty() {
        sanitized.push('-');
    }
    sanitized.push_str(&collapsed);
    if base.ends_with(char::is_whitespace) && !collapsed.is_empty() {
        sanitized.push('-');
    }

    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        UNNAMED.to_string()
    } else {
        sanitized
    }
}

pub fn public_url(file_name: &str) -> String {
    format!("{}/{}", UPLOADS_URL_PREFIX, file_name)
}
