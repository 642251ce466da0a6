//! One-shot post loading.
//!
//! [`PostLoader`] runs a [`PostSource`] at most once and hands the outcome
//! to a completion callback supplied by the caller. The feed core only ever
//! sees the result, as a `DataLoaded` action dispatched by the shell.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::FeedError;
use crate::models::Post;
use crate::traits::PostSource;

/// Outcome delivered to the completion callback.
pub type LoadResult = Result<Vec<Post>, FeedError>;

/// Runs the fetch for one session.
pub struct PostLoader<S: ?Sized> {
    source: Arc<S>,
    handle: Option<JoinHandle<()>>,
}

impl<S> PostLoader<S>
where
    S: PostSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            handle: None,
        }
    }

    /// Spawn the fetch on the current tokio runtime.
    ///
    /// `on_loaded` is called exactly once with the outcome. Returns `false`
    /// without spawning anything if this loader already started.
    pub fn start<F>(&mut self, on_loaded: F) -> bool
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        if self.handle.is_some() {
            tracing::debug!("Post load already started, ignoring");
            return false;
        }

        let source = Arc::clone(&self.source);
        self.handle = Some(tokio::spawn(async move {
            tracing::info!("Loading posts");
            let result = source.fetch_posts().await;
            match &result {
                Ok(posts) => tracing::info!(count = posts.len(), "Post fetch finished"),
                Err(err) => tracing::warn!(code = err.error_code(), "Post fetch failed: {}", err),
            }
            on_loaded(result);
        }));
        true
    }

    pub fn is_started(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the spawned task has run to completion.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| handle.is_finished())
    }

    /// Stop an in-flight fetch. The callback will not run if it has not yet.
    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
