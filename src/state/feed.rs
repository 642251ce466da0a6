//! Feed state and its reducer.
//!
//! All view-state mutations go through [`reduce`]. The hosting shell turns
//! user input and data-source completions into [`FeedAction`]s and renders
//! whatever [`FeedState::view`] derives afterwards.

use crate::models::Post;
use crate::view_state::{filter_by_category, FeedViewState};

use super::{PaginationCursor, PostStore};

/// The currently selected category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filter: every post is shown
    #[default]
    All,
    /// Only posts whose category equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a selector value. The empty string means "all".
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }

    /// The selector value for this filter (empty for [`CategoryFilter::All`]).
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Events that change the feed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// The data source delivered the post collection
    DataLoaded(Vec<Post>),
    /// The user picked a category ("" for all)
    SelectCategory(String),
    /// The user asked for more posts
    LoadMore,
}

/// Complete view state: posts, selection and pagination cursor.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    posts: PostStore,
    selected: CategoryFilter,
    cursor: PaginationCursor,
    loaded: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    /// Whether the data source has delivered yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Derive everything the presentation layer needs.
    pub fn view(&self) -> FeedViewState<'_> {
        FeedViewState::derive(self)
    }

    /// Apply an action in place.
    pub fn dispatch(&mut self, action: FeedAction) {
        let state = std::mem::take(self);
        *self = reduce(state, action);
    }
}

/// Pure transition function.
///
/// Selecting a category leaves the visible count untouched, so a count that
/// grew under one filter carries over to the next one and the slice clamps.
pub fn reduce(mut state: FeedState, action: FeedAction) -> FeedState {
    match action {
        FeedAction::DataLoaded(posts) => {
            if state.loaded {
                tracing::debug!("Replacing previously loaded posts");
            }
            tracing::info!(count = posts.len(), "Posts loaded");
            state.posts.replace_all(posts);
            state.loaded = true;
        }
        FeedAction::SelectCategory(value) => {
            let selected = CategoryFilter::from_value(value);
            tracing::debug!(
                category = selected.as_value(),
                visible_count = state.cursor.visible_count(),
                "Category selected"
            );
            state.selected = selected;
        }
        FeedAction::LoadMore => {
            let has_more = {
                let filtered = filter_by_category(state.posts.current(), &state.selected);
                state.cursor.has_more(&filtered)
            };
            if has_more {
                state.cursor.load_more();
                tracing::debug!(visible_count = state.cursor.visible_count(), "Loaded more");
            } else {
                tracing::debug!("Ignoring load more: no further posts");
            }
        }
    }
    state
}
