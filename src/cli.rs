//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::upload::ImagePath;

/// Top-level CLI parser for `gh-image`.
#[derive(Debug, Parser)]
#[command(
    name = "gh-image",
    version,
    about = "Commit an image and get a GitHub preview link for PR comments"
)]
pub struct Cli {
    /// Directory to resolve the repository from (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Git executable to run.
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub git: Option<String>,

    /// The command to execute; `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the MCP server over stdin/stdout.
    Serve,
    /// Commit one path and print the preview payload.
    Upload {
        /// Repository-relative path of the image or image directory.
        #[arg(value_parser = parse_image_path)]
        path: ImagePath,
    },
    /// Print the tool descriptor served by `tools/list`.
    Tools,
}

fn parse_image_path(raw: &str) -> Result<ImagePath, String> {
    ImagePath::new(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["gh-image"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_upload_with_global_flags() {
        let cli = Cli::parse_from(["gh-image", "upload", "images/a.png", "--repo", "/work/widgets"]);
        let Some(Command::Upload { path }) = cli.command else { panic!("expected upload") };
        assert_eq!(path.as_str(), "images/a.png");
        assert_eq!(cli.repo.as_deref(), Some(std::path::Path::new("/work/widgets")));
    }

    #[test]
    fn rejects_empty_upload_path() {
        let err = Cli::try_parse_from(["gh-image", "upload", ""]).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn parses_tools_subcommand() {
        let cli = Cli::parse_from(["gh-image", "tools"]);
        assert!(matches!(cli.command, Some(Command::Tools)));
    }
}
