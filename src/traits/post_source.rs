//! Data source trait for the post collection.

use async_trait::async_trait;

use crate::error::FeedError;
use crate::models::Post;

/// Supplies the full post collection.
///
/// The feed core never calls this itself; the hosting shell runs it once
/// through a [`PostLoader`](crate::loader::PostLoader) and feeds the result
/// back as a [`FeedAction::DataLoaded`](crate::state::FeedAction::DataLoaded).
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch every post, in the order the backend returns them.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError>;
}
