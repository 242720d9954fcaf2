//! Model Context Protocol adapter.
//!
//! Plumbing only: parses JSON-RPC lines, exposes the single
//! `commit-and-upload-image` tool and forwards calls to [`crate::upload`].

pub mod protocol;
pub mod server;
pub mod tool;

pub use server::Server;
pub use tool::{ToolResult, TOOL_NAME};
