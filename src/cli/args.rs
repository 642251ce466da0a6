//! Command-line argument parsing for postboard.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui {
        /// Base URL override from `--url`
        base_url: Option<String>,
    },
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: postboard [OPTIONS]

Options:
  -u, --url <BASE_URL>  Base URL of the posts backend (env: POSTBOARD_URL)
  -V, --version         Print version
  -h, --help            Print this help

Keys:
  Left/Right, Tab       Change category
  m, Enter              Load more posts
  q, Esc, Ctrl+C        Quit";

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use postboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut base_url = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" | "-u" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                base_url = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--url=") {
                    base_url = Some(value.to_string());
                } else {
                    return Err(ArgsError::Unknown(other.to_string()));
                }
            }
        }
    }

    Ok(CliCommand::RunTui { base_url })
}
