//! In-memory stand-in for the posts backend.
//!
//! [`MockHttpClient`] answers GETs from a table of canned replies keyed by
//! exact URL. A URL with no reply gets a 404, the way the backend treats a
//! route it does not serve.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A GET the client received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Canned reply for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Reply with this response, whatever its status
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

/// Fake HTTP client for feeding [`HttpPostSource`](crate::adapters::HttpPostSource)
/// without a network.
///
/// Clones share replies and recorded requests, so a test can keep one clone
/// and hand the other to the source under test.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:3000/api/posts",
///     MockResponse::Success(Response::new(200, Bytes::from(r#"{"posts": []}"#))),
/// );
/// let source = HttpPostSource::new(client.clone(), "http://localhost:3000/api/posts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    replies: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

// A test that panicked mid-request must not hide the data from later asserts
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to GETs of exactly `url` with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.replies).insert(url.to_string(), response);
    }

    /// Every GET received so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    fn reply_for(&self, url: &str) -> MockResponse {
        lock(&self.replies).get(url).cloned().unwrap_or_else(|| {
            MockResponse::Success(Response::new(
                404,
                Bytes::from(format!("no route for {}", url)),
            ))
        })
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.reply_for(url) {
            MockResponse::Success(response) => Ok(response),
            MockResponse::Error(err) => Err(err),
        }
    }
}
