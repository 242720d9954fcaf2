//! The commit-and-upload operation.
//!
//! Stages and commits one repository-relative path, then composes a GitHub
//! blob URL for it from the new HEAD and the `origin` remote. Every failure
//! is caught here and turned into an [`ErrorResponse`]; nothing propagates
//! to the caller.
//!
//! Staging is not undone when the commit fails. The working tree is left
//! with the path staged and a warning is logged.

pub mod classify;
pub mod preview;
pub mod remote;
pub mod request;
pub mod response;

use thiserror::Error;
use tracing::{info, warn};

use crate::ports::git::{GitError, GitRepo};

pub use classify::{classify, ErrorCategory};
pub use preview::PreviewLink;
pub use remote::RemoteIdentity;
pub use request::{ImagePath, ImagePathError};
pub use response::{ErrorResponse, StructuredResult, SuccessResponse, UploadOutcome};

/// Commit message used for every upload.
pub const COMMIT_MESSAGE: &str = "Add image for PR comment";

/// Message returned on success.
pub const SUCCESS_MESSAGE: &str = "Image committed and uploaded successfully.";

/// Failure of one step of the upload sequence.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A git interaction failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// The `origin` remote does not point at GitHub.
    #[error("git remote origin URL is not a GitHub address: {0}")]
    UnrecognizedRemote(String),

    /// HEAD resolved to something that is not a full object hash.
    #[error("HEAD resolved to an unexpected commit identifier {0:?}")]
    MalformedCommit(String),
}

/// Runs the whole sequence for `path` and reports the outcome.
///
/// Blocks on each git subprocess in turn. Non-idempotent: every successful
/// call creates a new commit.
pub fn commit_and_upload(git: &dyn GitRepo, path: &ImagePath) -> UploadOutcome {
    match run_steps(git, path) {
        Ok(link) => {
            info!(path = %path, url = link.image_url(), "image committed");
            UploadOutcome::Success(SuccessResponse::new(&link))
        }
        Err(err) => {
            let response = classify(&err);
            warn!(path = %path, error = response.error(), "upload failed: {err}");
            UploadOutcome::Failure(response)
        }
    }
}

fn run_steps(git: &dyn GitRepo, path: &ImagePath) -> Result<PreviewLink, UploadError> {
    let root = git.resolve_root()?;
    git.stage(&root, path.as_str())?;

    if let Err(err) = git.commit(&root, path.as_str(), COMMIT_MESSAGE) {
        warn!(path = %path, root = %root.display(), "commit failed; path remains staged");
        return Err(err.into());
    }

    let commit = git.head_commit(&root)?;
    if !is_object_hash(&commit) {
        return Err(UploadError::MalformedCommit(commit));
    }

    let url = git.origin_url(&root)?;
    let identity = RemoteIdentity::parse(&url).ok_or(UploadError::UnrecognizedRemote(url))?;
    Ok(PreviewLink::new(&identity, &commit, path.as_str()))
}

/// SHA-1 (40) or SHA-256 (64) lowercase hex.
fn is_object_hash(s: &str) -> bool {
    matches!(s.len(), 40 | 64) && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
