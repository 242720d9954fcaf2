//! Recording adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::git::{GitRepo, GitResult};

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RootInput<'a> {
    root: &'a Path,
}

#[derive(Serialize)]
struct PathInput<'a> {
    root: &'a Path,
    path: &'a str,
}

#[derive(Serialize)]
struct CommitInput<'a> {
    root: &'a Path,
    path: &'a str,
    message: &'a str,
}

impl GitRepo for RecordingGitRepo {
    fn resolve_root(&self) -> GitResult<PathBuf> {
        let result = self.inner.resolve_root();
        record_result(&self.recorder, "git", "resolve_root", &(), &result);
        result
    }

    fn stage(&self, root: &Path, path: &str) -> GitResult<()> {
        let result = self.inner.stage(root, path);
        record_result(&self.recorder, "git", "stage", &PathInput { root, path }, &result);
        result
    }

    fn commit(&self, root: &Path, path: &str, message: &str) -> GitResult<()> {
        let result = self.inner.commit(root, path, message);
        let input = CommitInput { root, path, message };
        record_result(&self.recorder, "git", "commit", &input, &result);
        result
    }

    fn head_commit(&self, root: &Path) -> GitResult<String> {
        let result = self.inner.head_commit(root);
        record_result(&self.recorder, "git", "head_commit", &RootInput { root }, &result);
        result
    }

    fn origin_url(&self, root: &Path) -> GitResult<String> {
        let result = self.inner.origin_url(root);
        record_result(&self.recorder, "git", "origin_url", &RootInput { root }, &result);
        result
    }
}
