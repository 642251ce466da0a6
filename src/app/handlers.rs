//! Message handling for the App.

use crate::state::FeedAction;

use super::{App, AppMessage, LoadStatus};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PostsLoaded(posts) => {
                self.feed.dispatch(FeedAction::DataLoaded(posts));
                self.load_status = LoadStatus::Loaded;
            }
            AppMessage::PostsLoadFailed(err) => {
                tracing::debug!(code = err.error_code(), "Showing load failure");
                self.load_status = LoadStatus::Failed {
                    code: err.error_code(),
                    message: err.user_message(),
                };
            }
        }
    }
}
