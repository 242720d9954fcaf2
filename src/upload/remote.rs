//! Owner and repository name from a GitHub remote URL.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Matches `git@github.com:owner/repo(.git)` and
/// `https://github.com/owner/repo(.git)` style addresses.
static GITHUB_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/]+)/([^/]+?)(?:\.git)?/?$").expect("remote pattern is valid")
});

/// The (owner, name) pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteIdentity {
    /// Account or organisation owning the repository.
    pub owner: String,
    /// Repository name without a `.git` suffix.
    pub name: String,
}

impl RemoteIdentity {
    /// Parses a remote URL, returning `None` unless both parts are found.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        Some(Self { owner: owner_of(url)?, name: name_of(url)? })
    }
}

/// Extracts the owner segment of a GitHub remote URL.
#[must_use]
pub fn owner_of(url: &str) -> Option<String> {
    capture(url, 1)
}

/// Extracts the repository-name segment of a GitHub remote URL.
#[must_use]
pub fn name_of(url: &str) -> Option<String> {
    capture(url, 2)
}

fn capture(url: &str, group: usize) -> Option<String> {
    GITHUB_REMOTE
        .captures(url.trim())
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}
