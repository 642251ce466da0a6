//! Reusable UI components.

pub mod category_selector;

pub use category_selector::{render_category_selector, CategoryItem};
