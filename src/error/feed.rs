//! Errors raised while fetching the post collection.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of the posts data source.
///
/// The feed core never sees these: they stop at the hosting shell, which
/// keeps showing the empty initial view.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status
    #[error("Server returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The body was not a valid posts payload
    #[error("Invalid posts payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FeedError::Http(HttpError::ConnectionFailed(_)) => "E_FEED_CONN",
            FeedError::Http(HttpError::Timeout(_)) => "E_FEED_TIMEOUT",
            FeedError::Http(HttpError::InvalidUrl(_)) => "E_FEED_URL",
            FeedError::Http(HttpError::Other(_)) => "E_FEED_HTTP",
            FeedError::Status { .. } => "E_FEED_STATUS",
            FeedError::Decode(_) => "E_FEED_DECODE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::Http(HttpError::ConnectionFailed(_)) => {
                "Unable to reach the posts server. Is it running?".to_string()
            }
            FeedError::Http(HttpError::Timeout(_)) => {
                "The posts server took too long to answer.".to_string()
            }
            FeedError::Http(HttpError::InvalidUrl(url)) => {
                format!("The posts URL is invalid: {}", url)
            }
            FeedError::Http(HttpError::Other(message)) => {
                format!("Could not load posts: {}", message)
            }
            FeedError::Status { status, .. } => match *status {
                404 => "The posts endpoint was not found.".to_string(),
                500..=599 => "The posts server is having issues.".to_string(),
                _ => format!("The posts server returned an error (HTTP {}).", status),
            },
            FeedError::Decode(_) => "The posts server sent data that could not be read.".to_string(),
        }
    }
}
