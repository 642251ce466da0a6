//! Type definitions for the application state.

/// Where the one-shot post fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch started, no result yet
    #[default]
    Loading,
    /// Posts arrived and were handed to the feed
    Loaded,
    /// Fetch failed; the feed keeps its empty initial view
    Failed {
        /// Stable code from `FeedError::error_code`
        code: &'static str,
        /// Text for the status line
        message: String,
    },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }
}
