//! Replaying adapter for the `GitRepo` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::{GitError, GitRepo, GitResult};

/// Replays recorded git operations from a cassette.
///
/// Inputs are ignored: each call takes the next recorded interaction for
/// its method, in order. A call past the end of the recording fails like
/// any other git call.
pub struct ReplayingGitRepo {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Arc::new(Mutex::new(replayer)) }
    }

    /// Handle on the underlying replayer, for inspecting it after the run.
    #[must_use]
    pub fn replayer(&self) -> Arc<Mutex<CassetteReplayer>> {
        Arc::clone(&self.replayer)
    }

    fn next_output(&self, method: &str) -> GitResult<serde_json::Value> {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer
            .next_interaction("git", method)
            .map(|interaction| interaction.output.clone())
            .map_err(GitError::Other)
    }

    fn replay<T: serde::de::DeserializeOwned>(&self, method: &str) -> GitResult<T> {
        extract_result(&self.next_output(method)?, method)
    }
}

/// Extracts a Result from a cassette output JSON value.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> GitResult<T> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(GitError::Other(msg));
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| GitError::Other(format!("git::{context}: failed to deserialize: {e}")))
}

impl GitRepo for ReplayingGitRepo {
    fn resolve_root(&self) -> GitResult<PathBuf> {
        self.replay("resolve_root")
    }

    fn stage(&self, _root: &Path, _path: &str) -> GitResult<()> {
        self.replay("stage")
    }

    fn commit(&self, _root: &Path, _path: &str, _message: &str) -> GitResult<()> {
        self.replay("commit")
    }

    fn head_commit(&self, _root: &Path) -> GitResult<String> {
        self.replay("head_commit")
    }

    fn origin_url(&self, _root: &Path) -> GitResult<String> {
        self.replay("origin_url")
    }
}
