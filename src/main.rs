//! Binary entrypoint for the `gh-image` MCP server.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording and replay are configured through GH_IMAGE_RECORD / GH_IMAGE_REPLAY.
    match gh_image::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
