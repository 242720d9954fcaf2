//! `gh-image upload` command.

use crate::context::ServiceContext;
use crate::upload::{self, ImagePath, UploadOutcome};

/// Commit `path` once and print the rich JSON payload on stdout.
///
/// # Errors
///
/// Returns the classified error message when the upload fails; the payload
/// has already been printed.
pub fn run(ctx: &ServiceContext, path: &ImagePath) -> Result<(), String> {
    let outcome = upload::commit_and_upload(ctx.git.as_ref(), path);
    println!("{}", outcome.to_json());
    match outcome {
        UploadOutcome::Success(_) => Ok(()),
        UploadOutcome::Failure(err) => Err(err.error().to_string()),
    }
}
