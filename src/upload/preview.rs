//! Preview link composition.

use super::remote::RemoteIdentity;

/// A GitHub URL to a committed file and its image-markdown wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLink {
    image_url: String,
    markdown: String,
}

impl PreviewLink {
    /// Builds the link for `path` as of `commit` in the given repository.
    #[must_use]
    pub fn new(identity: &RemoteIdentity, commit: &str, path: &str) -> Self {
        let image_url = format!(
            "https://github.com/{owner}/{repo}/blob/{commit}/{path}?raw=true",
            owner = identity.owner,
            repo = identity.name,
        );
        let markdown = format!("![img]({image_url})");
        Self { image_url, markdown }
    }

    /// Raw hosting URL.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// `![img](<url>)` form for embedding in a comment.
    #[must_use]
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}
