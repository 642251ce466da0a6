//! Application state for the postboard TUI.
//!
//! [`App`] is the hosting shell around the feed core: it owns the
//! [`FeedState`], the channel async work reports into, and the flags the
//! render loop reads. Key handling lives in `navigation`, async message
//! handling in `handlers`.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::LoadStatus;

use tokio::sync::mpsc;

use crate::loader::LoadResult;
use crate::state::FeedState;
use crate::view_state::{FeedViewState, ScrollState};

/// Main application state
pub struct App {
    /// Feed core state, mutated only through `FeedState::dispatch`
    pub feed: FeedState,
    /// Fetch progress shown in the status line
    pub load_status: LoadStatus,
    /// Scroll position of the post list, clamped by the renderer
    pub scroll: ScrollState,
    /// Where posts are fetched from, shown in the header
    pub source_label: String,
    /// Flag indicating the app should quit
    pub should_quit: bool,
    /// Set when visible state changed and the next loop iteration must draw
    pub needs_redraw: bool,
    /// Receiver for async messages. Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(source_label: impl Into<String>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            feed: FeedState::new(),
            load_status: LoadStatus::Loading,
            scroll: ScrollState::new(),
            source_label: source_label.into(),
            should_quit: false,
            // First frame is always drawn
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Derive what the current frame shows.
    pub fn view(&self) -> FeedViewState<'_> {
        self.feed.view()
    }

    /// Completion callback for `PostLoader::start`.
    ///
    /// Forwards the result into this app's message channel. If the
    /// receiver is gone the message is dropped.
    pub fn load_callback(&self) -> impl FnOnce(LoadResult) + Send + 'static {
        let tx = self.message_tx.clone();
        move |result| {
            let _ = tx.send(AppMessage::from(result));
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
