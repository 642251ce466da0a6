//! Error types for postboard.
//!
//! The feed core is total: filtering, slicing and category indexing never
//! fail. The only fallible boundary is the posts data source, whose errors
//! are described by [`FeedError`] and handled by the hosting shell.
//!
//! | Code | Cause |
//! |------|-------|
//! | `E_FEED_CONN` | Server unreachable |
//! | `E_FEED_TIMEOUT` | Request timed out |
//! | `E_FEED_URL` | Malformed base URL |
//! | `E_FEED_HTTP` | Other transport failure |
//! | `E_FEED_STATUS` | Non-2xx response |
//! | `E_FEED_DECODE` | Body is not a posts payload |

mod feed;

pub use feed::FeedError;
