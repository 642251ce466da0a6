//! Color theme constants for the postboard UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Category label on each post card
pub const COLOR_CATEGORY: Color = Color::Cyan;

/// "Load more" affordance - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Loading indicator - gray
pub const COLOR_PENDING: Color = Color::Gray;

/// Error status line
pub const COLOR_ERROR: Color = Color::Red;
