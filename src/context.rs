//! Service context wiring the git port to an adapter.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::recording::git::RecordingGitRepo;
use crate::adapters::replaying::git::ReplayingGitRepo;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::ports::git::GitRepo;

/// Bundles the git port with the recording session or replayer behind it,
/// if any.
///
/// Constructors wire up different adapter implementations (live,
/// replaying, recording).
pub struct ServiceContext {
    /// Git repository driven by the upload operation.
    pub git: Box<dyn GitRepo>,
    session: Option<RecordingSession>,
    replay: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ServiceContext {
    /// Builds the context the configuration asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if a cassette cannot be loaded or a recording
    /// directory cannot be prepared.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        if let Some(path) = &config.replay_cassette {
            return Self::replaying(path);
        }
        let live = LiveGitRepo::new(config.git_program.clone(), config.repo_dir.clone());
        match &config.record_dir {
            Some(dir) => Self::recording(live, dir),
            None => Ok(Self::live(live)),
        }
    }

    /// Creates a context that runs git for real.
    #[must_use]
    pub fn live(git: LiveGitRepo) -> Self {
        Self { git: Box::new(git), session: None, replay: None }
    }

    /// Creates a context that runs git and records every call.
    ///
    /// The cassette is written by [`ServiceContext::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be prepared.
    pub fn recording(git: LiveGitRepo, dir: &Path) -> Result<Self, String> {
        let session = RecordingSession::new(dir)?;
        let git = RecordingGitRepo::new(Box::new(git), session.git.clone());
        Ok(Self { git: Box::new(git), session: Some(session), replay: None })
    }

    /// Creates a context that answers git calls from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let git = ReplayingGitRepo::new(CassetteReplayer::new(&cassette));
        let replay = Some(git.replayer());
        Ok(Self { git: Box::new(git), session: None, replay })
    }

    /// Ends the run, writing the cassette when recording.
    ///
    /// Returns the cassette path if one was written. A replay that left
    /// recorded interactions unused is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        if let Some(unused) = self.unconsumed_replay().filter(|&n| n > 0) {
            warn!(unused, "replay finished with recorded git interactions left over");
        }
        let Self { git, session, .. } = self;
        // Release the adapter's handle on the recorder first.
        drop(git);
        session.map(RecordingSession::finish).transpose()
    }

    /// Recorded interactions not yet served, when replaying.
    fn unconsumed_replay(&self) -> Option<usize> {
        self.replay
            .as_ref()
            .map(|replayer| replayer.lock().map_or(0, |replayer| replayer.remaining()))
    }
}
