//! Error types for Tidemark core.

use thiserror::Error;

/// Result type for feed construction.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur when building a feed.
///
/// The taxonomy is deliberately small: configuration is validated once
/// at construction, and every engine operation afterwards is total — an
/// unknown user yields a freshly-created empty record, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The per-user capacity was not positive.
    #[error("max_size must be positive")]
    InvalidMaxSize,

    /// The default page size was not positive.
    #[error("per_page must be positive")]
    InvalidPerPage,
}
