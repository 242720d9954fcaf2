//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::ports::git::{GitError, GitRepo, GitResult};

/// Live git adapter that shells out to the `git` CLI.
#[derive(Debug, Clone)]
pub struct LiveGitRepo {
    program: String,
    start_dir: Option<PathBuf>,
}

impl LiveGitRepo {
    /// Creates an adapter running `program`, resolving the repository root
    /// from `start_dir` (or the process working directory when `None`).
    #[must_use]
    pub fn new(program: impl Into<String>, start_dir: Option<PathBuf>) -> Self {
        Self { program: program.into(), start_dir }
    }

    fn run(&self, cwd: Option<&Path>, args: &[&str]) -> GitResult<String> {
        let command = render_command(&self.program, args);
        debug!(%command, cwd = ?cwd, "running git");

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd
            .output()
            .map_err(|source| GitError::Spawn { program: self.program.clone(), source })?;

        if !output.status.success() {
            return Err(GitError::Failed {
                command,
                code: output.status.code(),
                stderr: failure_text(&output.stderr, &output.stdout),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitRepo for LiveGitRepo {
    fn resolve_root(&self) -> GitResult<PathBuf> {
        self.run(self.start_dir.as_deref(), &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    fn stage(&self, root: &Path, path: &str) -> GitResult<()> {
        self.run(Some(root), &["add", "--", path]).map(drop)
    }

    fn commit(&self, root: &Path, path: &str, message: &str) -> GitResult<()> {
        self.run(Some(root), &["commit", "-m", message, "--", path]).map(drop)
    }

    fn head_commit(&self, root: &Path) -> GitResult<String> {
        self.run(Some(root), &["rev-parse", "HEAD"])
    }

    fn origin_url(&self, root: &Path) -> GitResult<String> {
        self.run(Some(root), &["config", "--get", "remote.origin.url"])
    }
}

/// Git's diagnostic for a failed command. Some failures, such as a commit
/// with nothing to commit, only explain themselves on stdout.
fn failure_text(stderr: &[u8], stdout: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let text = if stderr.trim().is_empty() { String::from_utf8_lossy(stdout) } else { stderr };
    text.trim().to_string()
}

/// Renders a command line for diagnostics, quoting arguments with spaces.
fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        if arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}
