//! Common test utilities for integration tests.
//!
//! Sample post collections and mock configurations shared by the
//! integration tests.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use postboard::models::Post;

/// Default posts URL used by mock-backed tests.
pub const POSTS_URL: &str = "http://localhost:3000/api/posts";

/// Five posts across two categories, first-seen order "a" then "b".
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new("1", "First", "Hello", "a"),
        Post::new("2", "Second", "World", "b"),
        Post::new("3", "Third", "Again", "a"),
        Post::new("4", "Fourth", "More", "b"),
        Post::new("5", "Fifth", "Last", "a"),
    ]
}

/// `n` posts alternating between categories "x" and "y", ids 1..=n.
pub fn numbered_posts(n: usize) -> Vec<Post> {
    (1..=n)
        .map(|i| {
            let category = if i % 2 == 1 { "x" } else { "y" };
            Post::new(i.to_string(), format!("Post {}", i), "", category)
        })
        .collect()
}

/// `{"posts": [...]}` body for the given posts.
pub fn posts_body(posts: &[Post]) -> String {
    serde_json::json!({ "posts": posts }).to_string()
}

/// Ids of the given posts, in order.
pub fn ids<'a, I>(posts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts.into_iter().map(|post| post.id.clone()).collect()
}
