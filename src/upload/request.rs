//! Validated request input.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Rejection of a request before any git command runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImagePathError {
    /// The path was empty or only whitespace.
    #[error("commitAndUploadImagePath must be a non-empty path")]
    Empty,
}

/// Repository-relative path of the file or directory to publish.
///
/// Always non-empty. It is interpreted relative to the repository root,
/// never the process working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ImagePath(String);

impl ImagePath {
    /// Validates `raw` as an image path.
    ///
    /// # Errors
    ///
    /// Returns [`ImagePathError::Empty`] for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ImagePathError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ImagePathError::Empty);
        }
        Ok(Self(raw))
    }

    /// The path as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImagePath {
    type Error = ImagePathError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
