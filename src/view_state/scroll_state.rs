//! Scroll state for the post list
//!
//! Keys move the offset freely; the renderer records the content height and
//! viewport each frame and clamps the offset to what can actually be shown.

/// Rows assumed per page before the first frame reports a real viewport
pub const DEFAULT_VIEWPORT: usize = 10;

/// Scroll position of the post list (0 = first row at the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// First content row shown
    pub offset: usize,
    /// Largest useful offset (calculated during render)
    pub max_offset: usize,
    /// Rows visible in the list area (calculated during render)
    pub viewport: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendered content height and viewport, clamping the offset.
    pub fn set_bounds(&mut self, content_rows: usize, viewport: usize) {
        self.viewport = viewport;
        self.max_offset = content_rows.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Rows moved by PgUp/PgDn: one viewport, keeping a row of context.
    pub fn page(&self) -> usize {
        self.viewport.saturating_sub(1).max(1)
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    /// Back to the first row.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }
}
