//! Git repository port for the commit-and-upload workflow.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a single git interaction.
///
/// The rendered message of every variant carries the substring `git`, and
/// `Failed` includes git's own stderr so that downstream classification can
/// recognise diagnostics such as `fatal: not a git repository`.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Git ran and exited unsuccessfully.
    #[error("Command failed: {command}\n{stderr}")]
    Failed {
        /// The rendered command line.
        command: String,
        /// Exit code, when the process was not killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed; standard output when git
        /// wrote nothing to stderr.
        stderr: String,
    },

    /// A failure replayed from a cassette, or reported by another adapter.
    #[error("{0}")]
    Other(String),
}

/// Result alias for git port operations.
pub type GitResult<T> = Result<T, GitError>;

/// Drives the git state transitions needed to publish an image.
///
/// Abstracting git access allows deterministic replay and testing
/// without requiring a real repository.
pub trait GitRepo: Send + Sync {
    /// Returns the absolute top-level directory of the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error when the process is not inside a working tree.
    fn resolve_root(&self) -> GitResult<PathBuf>;

    /// Stages `path` (relative to `root`).
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails.
    fn stage(&self, root: &Path, path: &str) -> GitResult<()>;

    /// Commits only `path` with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if `git commit` fails, e.g. when nothing changed.
    fn commit(&self, root: &Path, path: &str, message: &str) -> GitResult<()>;

    /// Returns the full hash of HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits.
    fn head_commit(&self, root: &Path) -> GitResult<String>;

    /// Returns the configured URL of the `origin` remote.
    ///
    /// # Errors
    ///
    /// Returns an error if no `origin` remote is configured.
    fn origin_url(&self, root: &Path) -> GitResult<String>;
}
