//! HTTP-backed post source.
//!
//! Fetches `GET {base_url}{posts_path}` and decodes `{"posts": [...]}`.

use async_trait::async_trait;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::models::{Post, PostsResponse};
use crate::traits::{Headers, HttpClient, PostSource};

/// [`PostSource`] that reads the posts endpoint through an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpPostSource<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> HttpPostSource<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a source pointing at the endpoint described by `config`.
    pub fn from_config(client: C, config: &FeedConfig) -> Self {
        Self::new(client, config.posts_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C: HttpClient> PostSource for HttpPostSource<C> {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(url = %self.url, "Fetching posts");
        let response = self.client.get(&self.url, &headers).await?;

        if !response.is_success() {
            return Err(FeedError::Status {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        let payload: PostsResponse = response.json()?;
        Ok(payload.posts)
    }
}
