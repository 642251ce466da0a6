//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticPostSource`] - Post source with a fixed result

pub mod http;
pub mod post_source;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use post_source::StaticPostSource;
