//! "Load more" pagination cursor.

/// Number of posts shown before any "load more".
pub const DEFAULT_VISIBLE_COUNT: usize = 5;

/// Number of posts revealed by each "load more".
pub const LOAD_MORE_STEP: usize = 5;

/// How many items from the front of the filtered sequence are displayed.
///
/// The count only grows through [`load_more`](Self::load_more) and is never
/// bounded by the collection length; slicing clamps instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    visible_count: usize,
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self {
            visible_count: DEFAULT_VISIBLE_COUNT,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Go back to the default page size.
    pub fn reset(&mut self) {
        self.visible_count = DEFAULT_VISIBLE_COUNT;
    }

    pub fn load_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(LOAD_MORE_STEP);
    }

    /// The first `min(visible_count, len)` items of `filtered`.
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let end = self.visible_count.min(filtered.len());
        &filtered[..end]
    }

    pub fn has_more<T>(&self, filtered: &[T]) -> bool {
        self.visible_count < filtered.len()
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = PaginationCursor::default();
        assert_eq!(cursor.visible_count(), DEFAULT_VISIBLE_COUNT);
        assert_eq!(cursor.visible_count(), 5);
    }

    #[test]
    fn test_load_more_adds_step() {
        let mut cursor = PaginationCursor::new();
        cursor.load_more();
        assert_eq!(cursor.visible_count(), 10);
        cursor.load_more();
        assert_eq!(cursor.visible_count(), 15);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut cursor = PaginationCursor::new();
        cursor.load_more();
        cursor.load_more();
        cursor.reset();
        assert_eq!(cursor.visible_count(), DEFAULT_VISIBLE_COUNT);
    }

    #[test]
    fn test_visible_slice_clamps_to_length() {
        let items: Vec<u32> = (0..3).collect();
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.visible_slice(&items), &[0, 1, 2]);
        assert!(!cursor.has_more(&items));
    }

    #[test]
    fn test_visible_slice_takes_prefix() {
        let items: Vec<u32> = (0..12).collect();
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.visible_slice(&items), &[0, 1, 2, 3, 4]);
        assert!(cursor.has_more(&items));
    }

    #[test]
    fn test_has_more_is_strict() {
        // Exactly five items with a count of five: nothing left to load
        let items: Vec<u32> = (0..5).collect();
        let cursor = PaginationCursor::new();
        assert!(!cursor.has_more(&items));

        let items: Vec<u32> = (0..6).collect();
        assert!(cursor.has_more(&items));
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        let cursor = PaginationCursor::new();
        assert!(cursor.visible_slice(&items).is_empty());
        assert!(!cursor.has_more(&items));
    }

    #[test]
    fn test_over_incrementing_is_harmless() {
        let items: Vec<u32> = (0..7).collect();
        let mut cursor = PaginationCursor::new();
        for _ in 0..10 {
            cursor.load_more();
        }
        assert_eq!(cursor.visible_count(), 55);
        assert_eq!(cursor.visible_slice(&items).len(), 7);
        assert!(!cursor.has_more(&items));
    }

    #[test]
    fn test_has_more_stays_false_once_exhausted() {
        let items: Vec<u32> = (0..12).collect();
        let mut cursor = PaginationCursor::new();
        let mut seen_false = false;
        for _ in 0..6 {
            if seen_false {
                assert!(!cursor.has_more(&items));
            }
            if !cursor.has_more(&items) {
                seen_false = true;
            }
            cursor.load_more();
        }
        assert!(seen_false);
    }

    #[test]
    fn test_visible_slice_is_stable_across_calls() {
        let items: Vec<u32> = (0..12).collect();
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.visible_slice(&items), cursor.visible_slice(&items));
    }
}
