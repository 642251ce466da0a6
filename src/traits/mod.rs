//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`PostSource`] - Supplies the post collection

pub mod http;
pub mod post_source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use post_source::PostSource;
