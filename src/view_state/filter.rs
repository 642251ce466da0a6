//! Category filter projection

use crate::models::Post;
use crate::state::CategoryFilter;

/// Posts matching `selected`, in their original order.
///
/// [`CategoryFilter::All`] keeps every post. An unknown category yields an
/// empty list.
pub fn filter_by_category<'a>(posts: &'a [Post], selected: &CategoryFilter) -> Vec<&'a Post> {
    match selected {
        CategoryFilter::All => posts.iter().collect(),
        CategoryFilter::Only(category) => posts
            .iter()
            .filter(|post| post.category == *category)
            .collect(),
    }
}
