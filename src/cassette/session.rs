//! Recording session owning the git cassette recorder.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the git cassette inside a session directory.
pub const GIT_CASSETTE: &str = "git.cassette.yaml";

/// Owns the recorder shared with `RecordingGitRepo` for one process run.
///
/// The cassette is written to `<dir>/git.cassette.yaml` by [`finish`].
///
/// [`finish`]: RecordingSession::finish
pub struct RecordingSession {
    /// Recorder for git interactions.
    pub git: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Create a session writing into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A git cassette already exists in the directory
    /// - The directory cannot be created
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = output_dir.into();
        let path = output_dir.join(GIT_CASSETTE);

        if path.exists() {
            return Err(format!("Cassette already exists: {}", path.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let name = format!("{}-git", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(path, name, env!("CARGO_PKG_VERSION"));

        Ok(Self { git: Arc::new(Mutex::new(recorder)) })
    }

    /// Write the git cassette to disk.
    ///
    /// All adapters holding the recorder must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the file cannot
    /// be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.git)
            .map_err(|_| "Recording adapter for git still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for git poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write git cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn session_writes_git_cassette_on_finish() {
        let dir = std::env::temp_dir().join("gh_image_session_test");
        let _ = std::fs::remove_dir_all(&dir);

        let session = RecordingSession::new(&dir).expect("session should start");
        assert!(dir.exists());
        session.git.lock().unwrap().record("git", "head_commit", json!({}), json!({"ok": "abc"}));

        let written = session.finish().expect("finish should succeed");
        assert_eq!(written, dir.join(GIT_CASSETTE));

        let cassette = Cassette::load(&written).unwrap();
        assert_eq!(cassette.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(cassette.interactions.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn refuses_to_overwrite_existing_cassette() {
        let dir = std::env::temp_dir().join("gh_image_session_existing_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(GIT_CASSETTE), "name: x").unwrap();

        let err = RecordingSession::new(&dir).err().expect("should refuse");
        assert!(err.contains("already exists"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn finish_fails_while_recorder_is_shared() {
        let dir = std::env::temp_dir().join("gh_image_session_shared_test");
        let _ = std::fs::remove_dir_all(&dir);

        let session = RecordingSession::new(&dir).unwrap();
        let _held = Arc::clone(&session.git);
        let err = session.finish().unwrap_err();
        assert!(err.contains("still has references"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
