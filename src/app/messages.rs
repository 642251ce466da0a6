//! AppMessage enum for async communication within the application.

use crate::error::FeedError;
use crate::loader::LoadResult;
use crate::models::Post;

/// Messages received from async operations
#[derive(Debug)]
pub enum AppMessage {
    /// The post fetch finished with the full collection
    PostsLoaded(Vec<Post>),
    /// The post fetch failed
    PostsLoadFailed(FeedError),
}

impl From<LoadResult> for AppMessage {
    fn from(result: LoadResult) -> Self {
        match result {
            Ok(posts) => AppMessage::PostsLoaded(posts),
            Err(err) => AppMessage::PostsLoadFailed(err),
        }
    }
}
