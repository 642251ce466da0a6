//! Post list and footer lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::LoadStatus;
use crate::models::Post;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_CATEGORY, COLOR_DIM, COLOR_ERROR, COLOR_PENDING};
use crate::view_state::FeedViewState;

const CATEGORY_PREFIX: &str = "Category: ";

/// Rows for one post card wrapped to `width` columns: title, content,
/// category, then a spacer. Each returned line is exactly one screen row.
pub fn post_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let title_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = wrap_text(&post.title, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, title_style)))
        .collect();

    for content_line in post.content.lines() {
        lines.extend(wrap_text(content_line, width).into_iter().map(Line::raw));
    }

    let category_width = width.saturating_sub(CATEGORY_PREFIX.len()).max(1);
    for (idx, row) in wrap_text(&post.category, category_width).into_iter().enumerate() {
        let prefix = if idx == 0 {
            CATEGORY_PREFIX.to_string()
        } else {
            " ".repeat(CATEGORY_PREFIX.len())
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(COLOR_DIM)),
            Span::styled(row, Style::default().fg(COLOR_CATEGORY)),
        ]));
    }

    lines.push(Line::default());
    lines
}

/// All rows of the visible posts, in display order.
pub fn feed_lines(view: &FeedViewState<'_>, width: usize) -> Vec<Line<'static>> {
    view.visible
        .iter()
        .flat_map(|post| post_lines(post, width))
        .collect()
}

/// The "load more" affordance, present only when more posts match.
pub fn load_more_line(view: &FeedViewState<'_>) -> Option<Line<'static>> {
    if !view.has_more {
        return None;
    }
    Some(Line::from(vec![
        Span::styled("[m] ", Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("Load more ({} remaining)", view.remaining()),
            Style::default().fg(COLOR_ACTIVE),
        ),
    ]))
}

/// Fetch progress or an empty-result note.
pub fn status_line(status: &LoadStatus, view: &FeedViewState<'_>) -> Option<Line<'static>> {
    match status {
        LoadStatus::Loading => Some(Line::styled(
            "Loading posts...",
            Style::default().fg(COLOR_PENDING),
        )),
        LoadStatus::Failed { code, message } => Some(Line::from(vec![
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
            Span::styled(format!(" [{}]", code), Style::default().fg(COLOR_DIM)),
        ])),
        LoadStatus::Loaded if view.is_empty() => Some(Line::styled(
            "No posts in this category.",
            Style::default().fg(COLOR_DIM),
        )),
        LoadStatus::Loaded => None,
    }
}
