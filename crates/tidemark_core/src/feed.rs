//! Feed façade over a backend.

use crate::backend::FeedBackend;
use crate::config::FeedConfig;
use crate::error::FeedResult;
use crate::event::Event;
use crate::memory::MemoryBackend;
use crate::response::Response;
use crate::types::{Timestamp, UserId};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A configured activity feed.
///
/// The feed validates its configuration once, owns a backend, and
/// applies the configured `per_page` default to pagination. All other
/// semantics live in the backend; the feed only forwards.
///
/// Batched methods take a slice of [`UserId`]s and return per-user
/// [`Response`] mappings. The `*_for` conveniences are the batch-of-one
/// special case for a single user.
#[derive(Clone)]
pub struct Feed {
    backend: Arc<dyn FeedBackend>,
    config: FeedConfig,
}

// Hand-written: the backend trait object carries no `Debug` bound.
impl fmt::Debug for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feed")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Feed {
    /// Builds a feed over a fresh in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `max_size` or `per_page` is
    /// zero; nothing past construction can fail.
    pub fn new(config: FeedConfig) -> FeedResult<Self> {
        config.validate()?;
        let backend = Arc::new(MemoryBackend::new(
            config.max_size,
            config.namespace.clone(),
        ));
        Ok(Self { backend, config })
    }

    /// Builds a feed over a caller-supplied backend.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `max_size` or `per_page` is
    /// zero.
    pub fn with_backend(config: FeedConfig, backend: Arc<dyn FeedBackend>) -> FeedResult<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// The feed's configuration.
    #[must_use]
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// The underlying backend.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn FeedBackend> {
        &self.backend
    }

    /// Stores one event per user. See [`FeedBackend::store`].
    pub fn store(
        &self,
        user_ids: &[UserId],
        value: Value,
        at: Option<Timestamp>,
    ) -> Response<bool> {
        self.backend.store(user_ids, value, at)
    }

    /// Deletes by value per user. See [`FeedBackend::delete`].
    pub fn delete(
        &self,
        user_ids: &[UserId],
        value: &Value,
        at: Option<Timestamp>,
    ) -> Response<bool> {
        self.backend.delete(user_ids, value, at)
    }

    /// Deletes every matching event per user. See
    /// [`FeedBackend::delete_if`].
    pub fn delete_if(&self, user_ids: &[UserId], mut predicate: impl FnMut(&UserId, &Event) -> bool) {
        self.backend.delete_if(user_ids, &mut predicate);
    }

    /// Replaces each user's record with an empty one. See
    /// [`FeedBackend::wipe`].
    pub fn wipe(&self, user_ids: &[UserId]) -> Response<bool> {
        self.backend.wipe(user_ids)
    }

    /// Each user's full activity, newest-first.
    pub fn fetch(&self, user_ids: &[UserId]) -> Response<Vec<Event>> {
        self.backend.fetch(user_ids)
    }

    /// One page of each user's activity; `per_page` defaults from the
    /// feed configuration. See [`FeedBackend::paginate`].
    pub fn paginate(
        &self,
        user_ids: &[UserId],
        page: Option<usize>,
        per_page: Option<usize>,
        peek: bool,
    ) -> Response<Vec<Event>> {
        let per_page = per_page.unwrap_or(self.config.per_page);
        self.backend.paginate(user_ids, page, per_page, peek)
    }

    /// Sets each user's last-read marker; `at` defaults to now.
    pub fn reset_last_read(
        &self,
        user_ids: &[UserId],
        at: Option<Timestamp>,
    ) -> Response<Timestamp> {
        self.backend.reset_last_read(user_ids, at)
    }

    /// Each user's activity size.
    pub fn total_count(&self, user_ids: &[UserId]) -> Response<usize> {
        self.backend.total_count(user_ids)
    }

    /// Each user's count of events newer than their last-read marker.
    pub fn unread_count(&self, user_ids: &[UserId]) -> Response<usize> {
        self.backend.unread_count(user_ids)
    }

    /// Each user's last-read marker.
    pub fn last_read(&self, user_ids: &[UserId]) -> Response<Timestamp> {
        self.backend.last_read(user_ids)
    }

    /// Number of users with a materialized record.
    #[must_use]
    pub fn total_users(&self) -> usize {
        self.backend.total_users()
    }

    /// Best-effort in-memory footprint estimate in bytes.
    #[must_use]
    pub fn total_memory_bytes(&self) -> usize {
        self.backend.total_memory_bytes()
    }

    // Single-user conveniences: the batch-of-one special case.

    /// Stores one event for one user.
    pub fn store_for(
        &self,
        user_id: impl Into<UserId>,
        value: Value,
        at: Option<Timestamp>,
    ) -> bool {
        self.store(&[user_id.into()], value, at)
            .into_single()
            .unwrap_or_default()
    }

    /// Deletes by value for one user.
    pub fn delete_for(
        &self,
        user_id: impl Into<UserId>,
        value: &Value,
        at: Option<Timestamp>,
    ) -> bool {
        self.delete(&[user_id.into()], value, at)
            .into_single()
            .unwrap_or_default()
    }

    /// Wipes one user's record.
    pub fn wipe_for(&self, user_id: impl Into<UserId>) -> bool {
        self.wipe(&[user_id.into()]).into_single().unwrap_or_default()
    }

    /// One user's full activity, newest-first.
    pub fn fetch_for(&self, user_id: impl Into<UserId>) -> Vec<Event> {
        self.fetch(&[user_id.into()]).into_single().unwrap_or_default()
    }

    /// One page of one user's activity.
    pub fn paginate_for(
        &self,
        user_id: impl Into<UserId>,
        page: Option<usize>,
        per_page: Option<usize>,
        peek: bool,
    ) -> Vec<Event> {
        self.paginate(&[user_id.into()], page, per_page, peek)
            .into_single()
            .unwrap_or_default()
    }

    /// Sets one user's last-read marker.
    pub fn reset_last_read_for(
        &self,
        user_id: impl Into<UserId>,
        at: Option<Timestamp>,
    ) -> Timestamp {
        self.reset_last_read(&[user_id.into()], at)
            .into_single()
            .unwrap_or_default()
    }

    /// One user's activity size.
    pub fn total_count_for(&self, user_id: impl Into<UserId>) -> usize {
        self.total_count(&[user_id.into()])
            .into_single()
            .unwrap_or_default()
    }

    /// One user's unread count.
    pub fn unread_count_for(&self, user_id: impl Into<UserId>) -> usize {
        self.unread_count(&[user_id.into()])
            .into_single()
            .unwrap_or_default()
    }

    /// One user's last-read marker.
    pub fn last_read_for(&self, user_id: impl Into<UserId>) -> Timestamp {
        self.last_read(&[user_id.into()])
            .into_single()
            .unwrap_or_default()
    }
}
