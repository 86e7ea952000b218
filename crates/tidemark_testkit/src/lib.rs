//! # Tidemark Testkit
//!
//! Test utilities for Tidemark.
//!
//! This crate provides:
//! - Feed fixtures and seeding helpers
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use tidemark_testkit::prelude::*;
//!
//! let feed = small_feed(5);
//! feed.store_for("u", Value::from("hello"), None);
//! assert_eq!(feed.total_count_for("u"), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::{seeded_feed, small_feed};
    pub use crate::generators::{
        op_strategy, timestamp_strategy, user_id_strategy, value_strategy, FeedOp,
    };
    pub use tidemark_core::{
        Event, Feed, FeedBackend, FeedConfig, MemoryBackend, Response, Timestamp, UserId, Value,
    };
}
