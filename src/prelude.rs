//! Prelude module for convenient imports.
//!
//! ```ignore
//! use postboard::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, LoadStatus};

// Feed core
pub use crate::models::Post;
pub use crate::state::{reduce, CategoryFilter, FeedAction, FeedState, PaginationCursor};
pub use crate::view_state::FeedViewState;

// Data source boundary
pub use crate::error::FeedError;
pub use crate::loader::{LoadResult, PostLoader};
pub use crate::traits::{HttpClient, PostSource};

// UI
pub use crate::ui::render;
