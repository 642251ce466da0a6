//! Distinct category index

use std::collections::HashSet;

use crate::models::Post;

/// Every distinct category in `posts`, once each, in first-seen order.
///
/// Values are compared exactly; an empty category is kept like any other.
pub fn distinct_categories(posts: &[Post]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    posts
        .iter()
        .map(|post| post.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}
