//! Network [`HttpClient`] backed by reqwest.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Fetches the posts endpoint over the network.
///
/// reqwest failures are sorted into [`HttpError`] variants so the feed can
/// tell an unreachable server from a bad URL. Whatever status the server
/// answers with is passed through unchanged.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name, value)
            });

        let response = request.send().await.map_err(Self::convert_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unparseable_posts_url() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not a url", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing listens on port 1
        let client = ReqwestHttpClient::new();
        let result = client
            .get("http://127.0.0.1:1/api/posts", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }
}
