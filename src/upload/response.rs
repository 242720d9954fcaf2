//! Result types of the upload operation.
//!
//! [`UploadOutcome`] is the single source of truth. [`StructuredResult`]
//! is derived from it and never built independently, so `isError` and
//! `previewUrl` cannot disagree with the rich payload.

use serde::Serialize;

use super::preview::PreviewLink;
use super::SUCCESS_MESSAGE;

/// Rich success payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    is_success: bool,
    message: String,
    image_url: String,
    markdown_preview: String,
}

impl SuccessResponse {
    /// Success payload for a committed image.
    #[must_use]
    pub fn new(link: &PreviewLink) -> Self {
        Self {
            is_success: true,
            message: SUCCESS_MESSAGE.to_string(),
            image_url: link.image_url().to_string(),
            markdown_preview: link.markdown().to_string(),
        }
    }

    /// Human-readable summary.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw hosting URL of the committed file.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// `![img](<url>)` snippet.
    #[must_use]
    pub fn markdown_preview(&self) -> &str {
        &self.markdown_preview
    }
}

/// Rich error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    is_success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

impl ErrorResponse {
    /// Error payload with a classified message and optional diagnostics.
    #[must_use]
    pub fn new(error: impl Into<String>, details: Option<String>, stack: Option<String>) -> Self {
        Self { is_success: false, error: error.into(), details, stack }
    }

    /// Short classified message.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Remediation hint or raw failure text.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Rendered error chain.
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

/// Outcome of one commit-and-upload invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    /// The image was committed and a preview link composed.
    Success(SuccessResponse),
    /// Some step failed; later steps did not run.
    Failure(ErrorResponse),
}

impl UploadOutcome {
    /// Whether the operation failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The rich payload serialized as JSON text.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_value(self).map_or_else(|e| e.to_string(), |v| v.to_string())
    }
}

/// The narrow, protocol-declared projection of an [`UploadOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResult {
    /// True iff the operation failed.
    pub is_error: bool,
    /// Human-readable summary.
    pub message: String,
    /// Markdown image snippet, or `None` on failure.
    pub preview_url: Option<String>,
}

impl From<&UploadOutcome> for StructuredResult {
    fn from(outcome: &UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Success(ok) => Self {
                is_error: false,
                message: ok.message.clone(),
                preview_url: Some(ok.markdown_preview.clone()),
            },
            UploadOutcome::Failure(err) => Self {
                is_error: true,
                message: match &err.details {
                    Some(details) => format!("{}: {details}", err.error),
                    None => err.error.clone(),
                },
                preview_url: None,
            },
        }
    }
}
