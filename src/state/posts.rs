//! Raw post collection.

use std::sync::Arc;

use crate::models::Post;

/// Holds the posts in arrival order.
///
/// The collection is a shared immutable slice. `replace_all` swaps it whole
/// and nothing edits it in place, so cloning a [`FeedState`](super::FeedState)
/// never copies posts.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Arc<[Post]>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: Arc::from(Vec::new()),
        }
    }

    /// Replace the whole collection with a freshly delivered one.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = Arc::from(posts);
    }

    /// Current posts, in the order the data source delivered them.
    pub fn current(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
