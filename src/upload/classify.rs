//! Failure classification.
//!
//! Git reports failures as free text, so categories are recognised by
//! substring. Rules are evaluated top to bottom and the first match wins;
//! the last rule always matches.

use std::error::Error;

use super::response::ErrorResponse;

/// Closed set of failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Not inside a git working tree.
    NotARepository,
    /// Filesystem or credential permission denial.
    PermissionDenied,
    /// Any other failure reported by git.
    GitFailure,
    /// No recognisable signature.
    Unknown,
}

struct Rule {
    matches: fn(&str) -> bool,
    category: ErrorCategory,
}

const RULES: &[Rule] = &[
    Rule { matches: |m| m.contains("not a git repository"), category: ErrorCategory::NotARepository },
    Rule { matches: |m| m.contains("Permission denied"), category: ErrorCategory::PermissionDenied },
    Rule { matches: |m| m.contains("git"), category: ErrorCategory::GitFailure },
    Rule { matches: |_| true, category: ErrorCategory::Unknown },
];

impl ErrorCategory {
    /// Category of a failure message.
    #[must_use]
    pub fn of(message: &str) -> Self {
        RULES
            .iter()
            .find(|rule| (rule.matches)(message))
            .map_or(Self::Unknown, |rule| rule.category)
    }

    /// Short user-facing error text.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::NotARepository => "Not a valid git repository",
            Self::PermissionDenied => "Permission denied while running git",
            Self::GitFailure => "Git command failed",
            Self::Unknown => "An unknown error occurred",
        }
    }

    /// Remediation hint or raw message, depending on the category.
    fn details(self, raw: &str) -> Option<String> {
        match self {
            Self::NotARepository => Some(
                "Run this tool from inside a git working tree, or point it at one with \
                 --repo or GH_IMAGE_REPO."
                    .to_string(),
            ),
            Self::PermissionDenied => Some(
                "Check that the repository files are writable by this user and that git \
                 credentials are configured."
                    .to_string(),
            ),
            Self::GitFailure => Some(raw.to_string()),
            Self::Unknown => None,
        }
    }
}

/// Converts any failure into the error payload returned to callers.
#[must_use]
pub fn classify(err: &(dyn Error + 'static)) -> ErrorResponse {
    let message = err.to_string();
    let category = ErrorCategory::of(&message);
    ErrorResponse::new(category.summary(), category.details(&message), Some(render_chain(err)))
}

/// Renders an error and its sources, one per line.
fn render_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = format!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::git::GitError;

    #[test]
    fn priority_order_is_respected() {
        // Both signatures present: the repository rule outranks permissions.
        let msg = "fatal: not a git repository\nPermission denied";
        assert_eq!(ErrorCategory::of(msg), ErrorCategory::NotARepository);
        assert_eq!(
            ErrorCategory::of("error: open(\"x\"): Permission denied"),
            ErrorCategory::PermissionDenied
        );
        assert_eq!(ErrorCategory::of("Command failed: git commit"), ErrorCategory::GitFailure);
        assert_eq!(ErrorCategory::of("disk on fire"), ErrorCategory::Unknown);
    }

    #[test]
    fn not_a_repository_gets_remediation_details() {
        let err = GitError::Failed {
            command: "git rev-parse --show-toplevel".into(),
            code: Some(128),
            stderr: "fatal: not a git repository (or any of the parent directories): .git".into(),
        };
        let response = classify(&err);
        assert_eq!(response.error(), "Not a valid git repository");
        assert!(response.details().is_some_and(|d| !d.is_empty()));
    }

    #[test]
    fn git_failure_carries_raw_message() {
        let err = GitError::Failed {
            command: "git commit -m \"Add image for PR comment\" -- missing.png".into(),
            code: Some(1),
            stderr: "error: pathspec 'missing.png' did not match any file(s) known to git".into(),
        };
        let response = classify(&err);
        assert_eq!(response.error(), "Git command failed");
        assert_eq!(response.details(), Some(err.to_string().as_str()));
    }

    #[test]
    fn unknown_has_no_details_but_keeps_stack() {
        let err = std::io::Error::other("disk on fire");
        let response = classify(&err);
        assert_eq!(response.error(), "An unknown error occurred");
        assert_eq!(response.details(), None);
        assert_eq!(response.stack(), Some("Error: disk on fire"));
    }

    #[test]
    fn stack_lists_sources() {
        let err = GitError::Spawn {
            program: "git".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let response = classify(&err);
        assert_eq!(response.error(), "Permission denied while running git");
        let stack = response.stack().unwrap();
        assert!(stack.starts_with("Error: failed to spawn git"));
        assert!(stack.contains("\nCaused by: Permission denied"));
    }
}
