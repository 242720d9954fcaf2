//! Core library entry for the `gh-image` MCP server.
//!
//! The server exposes one tool, `commit-and-upload-image`, which commits an
//! image to the caller's repository and returns a GitHub preview link for
//! embedding in PR or issue comments. See [`upload`] for the operation and
//! [`mcp`] for the protocol plumbing around it.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod mcp;
pub mod ports;
pub mod upload;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the configuration is
/// invalid, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let config = config::Config::from_env()
        .map_err(|e| e.to_string())?
        .with_overrides(cli.repo.clone(), cli.git.clone());
    logging::init(&config.log_filter);

    let command = cli.command.unwrap_or(cli::Command::Serve);
    commands::dispatch(&command, &config)
}
