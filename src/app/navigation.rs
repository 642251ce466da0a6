//! Key handling and category navigation for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{CategoryFilter, FeedAction};

use super::App;

impl App {
    /// Handle a key press.
    ///
    /// Navigation keys become feed actions; everything else is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Right | KeyCode::Tab => self.next_category(),
            KeyCode::Left | KeyCode::BackTab => self.previous_category(),
            KeyCode::Char('m') | KeyCode::Enter => self.load_more(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(1),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Category values the selector cycles through, "All" first.
    ///
    /// The empty category selects the same thing as "All", so it is not
    /// offered as a separate stop.
    pub fn category_options(&self) -> Vec<String> {
        let view = self.view();
        std::iter::once(String::new())
            .chain(
                view.categories
                    .iter()
                    .filter(|category| !category.is_empty())
                    .map(|category| category.to_string()),
            )
            .collect()
    }

    /// Index of the current selection within [`Self::category_options`].
    ///
    /// A selection that no longer names a present category falls back to 0.
    pub fn selected_option_index(&self) -> usize {
        match self.feed.selected() {
            CategoryFilter::All => 0,
            CategoryFilter::Only(value) => self
                .category_options()
                .iter()
                .position(|option| option == value)
                .unwrap_or(0),
        }
    }

    pub fn next_category(&mut self) {
        self.step_category(1);
    }

    pub fn previous_category(&mut self) {
        let len = self.category_options().len();
        self.step_category(len.saturating_sub(1));
    }

    fn step_category(&mut self, offset: usize) {
        let options = self.category_options();
        if options.len() <= 1 {
            return;
        }
        let next = (self.selected_option_index() + offset) % options.len();
        if let Some(value) = options.into_iter().nth(next) {
            tracing::debug!(category = %value, "Category selected");
            self.feed.dispatch(FeedAction::SelectCategory(value));
            // A different list starts from its first row
            self.scroll.reset();
        }
    }

    /// Reveal more posts if the view says there are more to show.
    pub fn load_more(&mut self) {
        if self.view().has_more {
            self.feed.dispatch(FeedAction::LoadMore);
        }
    }
}
