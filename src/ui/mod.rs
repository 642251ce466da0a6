//! UI rendering for postboard
//!
//! One screen, top to bottom:
//! - Header with the source URL
//! - Category selector
//! - Post list for the current [`FeedViewState`](crate::view_state::FeedViewState)
//! - Footer with the load-more affordance, load status and keybind hints

pub mod components;
mod feed;
mod helpers;
mod theme;

pub use feed::{feed_lines, load_more_line, post_lines, status_line};
pub use helpers::{truncate_to_width, wrap_text};
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_PENDING,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use components::{render_category_selector, CategoryItem};

/// Below this width the selector switches to short labels
const COMPACT_WIDTH: u16 = 60;

/// Render the whole screen
///
/// Takes the app mutably to record the list's viewport into
/// [`App::scroll`], which clamps the scroll offset to the content.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, selector, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    let options = app.category_options();
    let items: Vec<CategoryItem<'_>> = options.iter().map(|value| CategoryItem::new(value)).collect();
    let compact = frame.area().width < COMPACT_WIDTH;
    frame.render_widget(
        Paragraph::new(render_category_selector(
            &items,
            app.selected_option_index(),
            compact,
        )),
        selector,
    );

    // Inside the border
    let inner_width = body.width.saturating_sub(2) as usize;
    let inner_height = body.height.saturating_sub(2) as usize;

    let view = app.feed.view();
    let lines = feed_lines(&view, inner_width);
    app.scroll.set_bounds(lines.len(), inner_height);
    let offset = u16::try_from(app.scroll.offset).unwrap_or(u16::MAX);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" Posts ({}) ", view.matching));
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((offset, 0)),
        body,
    );

    let mut footer_lines: Vec<Line<'static>> = Vec::with_capacity(2);
    if let Some(line) = status_line(&app.load_status, &view) {
        footer_lines.push(line);
    }
    if let Some(line) = load_more_line(&view) {
        footer_lines.push(line);
    }
    if footer_lines.len() < 2 {
        footer_lines.push(keybind_hints());
    }
    frame.render_widget(Paragraph::new(footer_lines), footer);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = " postboard ";
    let source_width = (area.width as usize).saturating_sub(TITLE.len());
    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_to_width(&app.source_label, source_width),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn keybind_hints() -> Line<'static> {
    Line::styled(
        " ←/→ category   ↑/↓ scroll   m load more   q quit",
        Style::default().fg(COLOR_DIM),
    )
}
