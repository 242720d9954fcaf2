//! Port traits defining external boundaries.
//!
//! The only boundary the upload workflow crosses is git. Implementations
//! live in `src/adapters/`.

pub mod git;

pub use git::{GitError, GitRepo, GitResult};
