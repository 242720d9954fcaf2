//! `gh-image tools` command.

use crate::mcp::tool;

/// Print the `tools/list` descriptor as pretty JSON.
///
/// # Errors
///
/// Returns an error string if the descriptor cannot be rendered.
pub fn run() -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(&tool::descriptor())
        .map_err(|e| format!("Failed to render tool descriptor: {e}"))?;
    println!("{rendered}");
    Ok(())
}
