//! CLI module for postboard.
//!
//! The CLI dispatcher runs early in main() to handle flags before the TUI
//! starts:
//!
//! ```ignore
//! use postboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(output) = run_cli_command(&command) {
//!     println!("{}", output);
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use version::{version_line, VERSION};

/// Text to print for commands that do not start the TUI.
///
/// # Returns
///
/// * `None` - If the command is `RunTui`
/// * `Some(text)` - Output for `--version` or `--help`
pub fn run_cli_command(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_line()),
        CliCommand::Help => Some(USAGE.to_string()),
        CliCommand::RunTui { .. } => None,
    }
}
