use service_core::error::AppError;
use std::fmt;

/// Region used when an upload arrives without one.
pub const UNKNOWN_REGION: &str = "unknown";

/// Opaque region key. Partitioning of the upload directory is done purely
/// through the `"{region}-"` filename prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Region taken from a request path. Any string is accepted: it is only
    /// ever compared against filenames, never joined into a path.
    pub fn from_path(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Region taken from the `region` form field of an upload. It becomes
    /// part of a filename, so it must not be able to name another directory.
    pub fn from_form(value: Option<&str>) -> Result<Self, AppError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(Self(UNKNOWN_REGION.to_string())),
        };

        if value == "."
            || value == ".."
            || value.contains(['/', '\\', '\0'])
        {
            return Err(AppError::bad_request(format!("Invalid region: {}", value)));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename prefix shared by every image of this region.
    pub fn prefix(&self) -> String {
        format!("{}-", self.0)
    }

    pub fn owns(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
