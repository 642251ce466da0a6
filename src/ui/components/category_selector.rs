//! Category Selector Component
//!
//! A horizontal selector over "All Categories" plus each category.
//! Uses `▶` marker for the selected item with responsive label sizing.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Label for the empty selection
pub const ALL_LABEL: &str = "All Categories";
/// Label for the empty selection on narrow terminals
pub const ALL_SHORT_LABEL: &str = "All";

/// A single item in the selector
#[derive(Debug, Clone)]
pub struct CategoryItem<'a> {
    /// Value dispatched when selected ("" for all)
    pub value: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> CategoryItem<'a> {
    /// Item whose label is the category text itself.
    pub fn new(value: &'a str) -> Self {
        if value.is_empty() {
            return Self::all();
        }
        Self {
            value,
            label: value,
            short_label: value,
        }
    }

    /// The "All Categories" item.
    pub fn all() -> Self {
        Self {
            value: "",
            label: ALL_LABEL,
            short_label: ALL_SHORT_LABEL,
        }
    }
}

/// Render a horizontal category selector
///
/// # Arguments
/// * `items` - The items to display
/// * `selected` - Index of the currently selected item
/// * `compact` - Use short labels and tighter spacing
///
/// # Example
/// ```ignore
/// let items = vec![CategoryItem::all(), CategoryItem::new("news")];
/// let line = render_category_selector(&items, 0, false);
/// ```
pub fn render_category_selector(
    items: &[CategoryItem<'_>],
    selected: usize,
    compact: bool,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    // Leading padding
    spans.push(Span::raw(" "));

    for (idx, item) in items.iter().enumerate() {
        let label = if compact { item.short_label } else { item.label };

        if idx == selected {
            let marker_style = Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD);
            let text_style = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);

            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if compact { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}
