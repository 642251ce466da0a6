//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. The filter
//! comes from `POSTBOARD_LOG` (same syntax as `RUST_LOG`), defaulting to
//! `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "POSTBOARD_LOG";

/// Build the filter from `POSTBOARD_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// With no path, nothing is installed and `tracing` macros are no-ops.
/// Calling this twice leaves the first subscriber in place.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(())
}
