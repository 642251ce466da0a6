//! Postboard - a terminal reader for a categorized post feed
//!
//! The feed core (`state`, `view_state`) is synchronous and pure: posts
//! arrive once through a [`traits::PostSource`], and the displayed slice is
//! derived from the selected category and a visible count. The `app`,
//! `ui` and `loader` modules host that core in a ratatui terminal UI.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod state;
pub mod traits;
pub mod ui;
pub mod view_state;
