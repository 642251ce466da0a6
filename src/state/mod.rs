//! Feed view state
//!
//! This module contains the state containers behind the post list:
//! - PostStore: the raw post collection (replaced wholesale on load)
//! - PaginationCursor: how many filtered posts are visible
//! - FeedState: posts + selected category + cursor, driven by `reduce`

mod feed;
mod pagination;
mod posts;

pub use feed::{reduce, CategoryFilter, FeedAction, FeedState};
pub use pagination::{PaginationCursor, DEFAULT_VISIBLE_COUNT, LOAD_MORE_STEP};
pub use posts::PostStore;
