//! Runtime configuration from the environment.
//!
//! Precedence, lowest first: defaults, a `.env` file in the working
//! directory, process environment, command-line flags.

use std::path::PathBuf;

use thiserror::Error;

/// Directory the repository root is resolved from.
pub const ENV_REPO: &str = "GH_IMAGE_REPO";
/// Git executable to run.
pub const ENV_GIT: &str = "GH_IMAGE_GIT";
/// Record git interactions into this directory.
pub const ENV_RECORD: &str = "GH_IMAGE_RECORD";
/// Replay git interactions from this cassette file.
pub const ENV_REPLAY: &str = "GH_IMAGE_REPLAY";
/// Log filter directive, checked before `RUST_LOG`.
pub const ENV_LOG: &str = "GH_IMAGE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Invalid configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Recording and replaying were both requested.
    #[error("GH_IMAGE_RECORD and GH_IMAGE_REPLAY cannot be set at the same time")]
    RecordAndReplay,
}

/// Resolved settings for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where to resolve the repository root from; the process working
    /// directory when `None`.
    pub repo_dir: Option<PathBuf>,
    /// Git executable name or path.
    pub git_program: String,
    /// Cassette output directory when recording.
    pub record_dir: Option<PathBuf>,
    /// Cassette to replay instead of running git.
    pub replay_cassette: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_dir: None,
            git_program: "git".to_string(),
            record_dir: None,
            replay_cassette: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for contradictory settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error for contradictory settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            repo_dir: get(ENV_REPO).map(PathBuf::from),
            git_program: get(ENV_GIT).unwrap_or(defaults.git_program),
            record_dir: get(ENV_RECORD).map(PathBuf::from),
            replay_cassette: get(ENV_REPLAY).map(PathBuf::from),
            log_filter: get(ENV_LOG).or_else(|| get("RUST_LOG")).unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, repo_dir: Option<PathBuf>, git_program: Option<String>) -> Self {
        if repo_dir.is_some() {
            self.repo_dir = repo_dir;
        }
        if let Some(program) = git_program {
            self.git_program = program;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.record_dir.is_some() && self.replay_cassette.is_some() {
            return Err(ConfigError::RecordAndReplay);
        }
        Ok(())
    }
}
