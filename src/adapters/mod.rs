//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpPostSource`] - Post source reading the posts endpoint over HTTP
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::StaticPostSource`] - Fixed post collection or failure

pub mod http_post_source;
pub mod mock;
pub mod reqwest_http;

pub use http_post_source::HttpPostSource;
pub use mock::{MockHttpClient, StaticPostSource};
pub use reqwest_http::ReqwestHttpClient;
