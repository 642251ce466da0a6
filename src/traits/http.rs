//! The HTTP seam under the posts endpoint.
//!
//! [`HttpPostSource`](crate::adapters::HttpPostSource) only ever issues one
//! GET and reads back a status and a body, so that is all [`HttpClient`]
//! offers. Transport failures are [`HttpError`]s; a non-2xx reply is still
//! a [`Response`] and the caller decides what it means.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Request headers, name to value.
pub type Headers = HashMap<String, String>;

/// Status and raw body of a reply from the posts server.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text with invalid UTF-8 replaced, for error reports.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Why the posts server could not be asked at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    /// Nothing accepted the connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// The configured posts URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// GET transport for the posts endpoint.
///
/// [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient) talks to the
/// network; [`MockHttpClient`](crate::adapters::MockHttpClient) replays
/// canned replies in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url`. Any status the server answers with comes back as `Ok`.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostsResponse;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(304, Bytes::new()).is_success());
        assert!(!Response::new(404, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_error_body_survives_bad_utf8() {
        let response = Response::new(502, Bytes::from_static(b"bad gateway \xff"));
        assert_eq!(response.text_lossy(), "bad gateway \u{fffd}");
    }

    #[test]
    fn test_posts_body_decodes() {
        let response = Response::new(
            200,
            Bytes::from(r#"{"posts":[{"id":"1","title":"t","content":"c","category":"news"}]}"#),
        );
        let payload: PostsResponse = response.json().unwrap();
        assert_eq!(payload.posts.len(), 1);
        assert_eq!(payload.posts[0].category, "news");
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            HttpError::InvalidUrl("not a url".to_string()).to_string(),
            "Invalid URL: not a url"
        );
    }
}
