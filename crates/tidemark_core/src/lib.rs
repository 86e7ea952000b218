//! # Tidemark Core
//!
//! A per-user, capacity-bounded, in-memory activity feed engine.
//!
//! Each tracked identity (a "user") owns an ordered set of timestamped
//! events, deduplicated by value and capped at a maximum size, plus a
//! "last read" marker used to compute unread counts.
//!
//! This crate provides:
//! - Value types: [`Value`], [`Event`], [`Key`], [`Timestamp`], [`UserId`]
//! - The [`FeedBackend`] provider contract and the in-memory [`MemoryBackend`]
//! - The [`Feed`] façade that applies configuration defaults
//! - Batched multi-user operations returning per-user [`Response`] mappings
//!
//! # Example
//!
//! ```rust
//! use tidemark_core::{Feed, FeedConfig, Value};
//!
//! let feed = Feed::new(FeedConfig::new().max_size(100).per_page(25))?;
//!
//! feed.store_for("alice", Value::from("logged in"), None);
//! feed.store_for("alice", Value::from("posted a comment"), None);
//!
//! assert_eq!(feed.total_count_for("alice"), 2);
//! assert_eq!(feed.unread_count_for("alice"), 2);
//!
//! // Viewing a page advances the read marker.
//! let page = feed.paginate_for("alice", Some(1), None, false);
//! assert_eq!(page.len(), 2);
//! assert_eq!(feed.unread_count_for("alice"), 0);
//! # Ok::<(), tidemark_core::FeedError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod event;
mod feed;
mod key;
mod memory;
mod paginate;
mod record;
mod response;
mod types;
mod value;

pub use backend::FeedBackend;
pub use config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use event::Event;
pub use feed::Feed;
pub use key::Key;
pub use memory::{MemoryBackend, UserTable};
pub use paginate::page_slice;
pub use record::UserRecord;
pub use response::Response;
pub use types::{Timestamp, UserId};
pub use value::Value;
