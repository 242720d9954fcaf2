//! `gh-image serve` command.

use crate::context::ServiceContext;
use crate::mcp::Server;

/// Run the MCP server on stdin/stdout until the client closes the input.
///
/// # Errors
///
/// Returns an error string if the runtime cannot start or stdio fails.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    let server = Server::new(ctx.git.as_ref());
    runtime
        .block_on(server.serve_stdio())
        .map_err(|e| format!("MCP server stopped: {e}"))
}
