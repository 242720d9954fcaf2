//! Command dispatch and handlers.

pub mod serve;
pub mod tools;
pub mod upload;

use tracing::info;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When the configuration asks for recording, every git interaction is
/// written to a cassette once the command completes, even on error.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    if matches!(command, Command::Tools) {
        return tools::run();
    }

    let ctx = ServiceContext::from_config(config)?;
    let result = dispatch_with_context(command, &ctx);

    if let Some(path) = ctx.finish()? {
        info!(path = %path.display(), "cassette written");
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Serve => serve::run(ctx),
        Command::Upload { path } => upload::run(ctx, path),
        Command::Tools => tools::run(),
    }
}
