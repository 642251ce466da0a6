//! Runtime configuration.
//!
//! Defaults can be overridden from the environment and then from the
//! command line:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `POSTBOARD_URL` | Base URL of the posts backend |
//! | `POSTBOARD_LOG_FILE` | Where to write the log file |
//! | `POSTBOARD_LOG` | `tracing` filter directive (read by [`crate::logging`]) |

use std::path::PathBuf;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the posts endpoint relative to the base URL.
pub const DEFAULT_POSTS_PATH: &str = "/api/posts";

pub const ENV_BASE_URL: &str = "POSTBOARD_URL";
pub const ENV_LOG_FILE: &str = "POSTBOARD_LOG_FILE";

/// Configuration for the feed client.
///
/// # Example
///
/// ```ignore
/// use postboard::config::FeedConfig;
///
/// let config = FeedConfig::from_env().with_base_url("http://localhost:8080");
/// assert_eq!(config.posts_url(), "http://localhost:8080/api/posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Backend base URL (scheme, host, optional port)
    pub base_url: String,
    /// Path of the posts endpoint
    pub posts_path: String,
    /// Log file location; `None` disables file logging
    pub log_file: Option<PathBuf>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            posts_path: DEFAULT_POSTS_PATH.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_posts_path(mut self, path: impl Into<String>) -> Self {
        self.posts_path = path.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Defaults overridden by `POSTBOARD_URL` and `POSTBOARD_LOG_FILE`.
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(path) = non_empty_env(ENV_LOG_FILE) {
            config = config.with_log_file(Some(PathBuf::from(path)));
        }
        config
    }

    /// Full URL of the posts endpoint.
    pub fn posts_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.posts_path.trim_start_matches('/')
        )
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// `<cache dir>/postboard/postboard.log`, if the platform has a cache dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("postboard").join("postboard.log"))
}
