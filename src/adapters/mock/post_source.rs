//! In-memory post source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::FeedError;
use crate::models::Post;
use crate::traits::{HttpError, PostSource};

#[derive(Debug, Clone)]
enum Outcome {
    Posts(Vec<Post>),
    Fail(HttpError),
}

/// [`PostSource`] that returns a fixed result and counts how often it ran.
#[derive(Debug, Clone)]
pub struct StaticPostSource {
    outcome: Outcome,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl StaticPostSource {
    /// Source that always yields `posts`.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            outcome: Outcome::Posts(posts),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source that always fails with a transport error.
    pub fn failing(error: HttpError) -> Self {
        Self {
            outcome: Outcome::Fail(error),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of completed or in-flight fetches (shared between clones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Outcome::Posts(posts) => Ok(posts.clone()),
            Outcome::Fail(err) => Err(FeedError::Http(err.clone())),
        }
    }
}
