//! View state module for decoupling UI rendering from feed state.
//!
//! Rendering is a pure function of view data. Everything on screen is
//! derived from a [`FeedState`](crate::state::FeedState) by the functions in
//! this module. The one exception is [`ScrollState`], the list's scroll
//! position, which belongs to the shell rather than the feed.
//!
//! ```text
//! PostStore ──► distinct_categories ────────────┐
//!     │                                         ▼
//!     └──► filter_by_category ──► cursor ──► FeedViewState ──► UI
//! ```
//!
//! ## Components
//!
//! - [`distinct_categories`]: category list for the selector
//! - [`filter_by_category`]: posts matching the current selection
//! - [`FeedViewState`]: categories, visible slice and `has_more` flag
//! - [`ScrollState`]: scroll offset of the rendered post list

mod categories;
mod feed_view;
mod filter;
mod scroll_state;

pub use categories::distinct_categories;
pub use feed_view::FeedViewState;
pub use filter::filter_by_category;
pub use scroll_state::{ScrollState, DEFAULT_VIEWPORT};
