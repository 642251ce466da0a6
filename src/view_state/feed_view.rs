//! Derived feed view
//!
//! This module provides the `FeedViewState` struct, which holds everything
//! the presentation layer renders for the post list.

use crate::models::Post;
use crate::state::{CategoryFilter, FeedState};

use super::{distinct_categories, filter_by_category};

/// View-only snapshot of the feed.
///
/// Borrowed from a [`FeedState`] and recomputed after every action. Deriving
/// twice from an unchanged state yields the same view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedViewState<'a> {
    /// Distinct categories in first-seen order (for the selector)
    pub categories: Vec<&'a str>,
    /// Posts currently on screen
    pub visible: Vec<&'a Post>,
    /// Whether a "load more" control should be offered
    pub has_more: bool,
    /// Current selection
    pub selected: &'a CategoryFilter,
    /// Number of posts matching the selection, visible or not
    pub matching: usize,
    /// Whether the data source has delivered yet
    pub loaded: bool,
}

impl<'a> FeedViewState<'a> {
    pub fn derive(state: &'a FeedState) -> Self {
        let posts = state.posts().current();
        let cursor = state.cursor();
        let filtered = filter_by_category(posts, state.selected());

        Self {
            categories: distinct_categories(posts),
            visible: cursor.visible_slice(&filtered).to_vec(),
            has_more: cursor.has_more(&filtered),
            selected: state.selected(),
            matching: filtered.len(),
            loaded: state.is_loaded(),
        }
    }

    /// Number of posts still hidden behind "load more".
    pub fn remaining(&self) -> usize {
        self.matching.saturating_sub(self.visible.len())
    }

    /// Whether there is nothing at all to show under the current selection.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
