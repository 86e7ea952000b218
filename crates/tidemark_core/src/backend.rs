//! Feed backend trait definition.

use crate::event::Event;
use crate::response::Response;
use crate::types::{Timestamp, UserId};
use crate::value::Value;

/// The provider contract of the feed engine.
///
/// A backend owns the mapping from user identity to per-user record and
/// implements every operation of the feed: store with deduplication and
/// capacity eviction, value-keyed deletion, read-marker accounting, and
/// pagination. [`MemoryBackend`](crate::MemoryBackend) is the provided
/// implementation; any alternate backend satisfying this trait is a
/// drop-in replacement behind the [`Feed`](crate::Feed) façade.
///
/// # Batched semantics
///
/// Every operation takes a collection of user ids and returns a
/// [`Response`] mapping each id to its per-user result; a single-user
/// call is the batch-of-one special case. An empty `user_ids` slice
/// yields an empty response. Unknown users are created lazily with an
/// empty record, so there is no "not found" outcome anywhere.
///
/// # Invariants
///
/// - After any mutation, no user's activity exceeds the configured
///   capacity and no two of their events share an equal value.
/// - Activity is always observed newest-first (`at` descending, ties in
///   insertion order).
/// - The last-read marker changes only through `reset_last_read` and
///   the non-`peek` form of `paginate`.
/// - All operations are total: no recoverable errors in normal use.
pub trait FeedBackend: Send + Sync {
    /// Stores one event per user, deduplicating by value.
    ///
    /// Inserting past capacity evicts that user's oldest event by
    /// timestamp, which may be the just-inserted event if it was
    /// backdated. Reports `true` per user iff the value was not already
    /// present. `at` defaults to now.
    fn store(&self, user_ids: &[UserId], value: Value, at: Option<Timestamp>) -> Response<bool>;

    /// Removes the event with an equal value from each user's activity.
    ///
    /// `at` is accepted for symmetry with [`store`](Self::store) but
    /// ignored: deletion is value-keyed because event equality excludes
    /// the timestamp. Reports `true` per user iff their activity shrank.
    fn delete(&self, user_ids: &[UserId], value: &Value, at: Option<Timestamp>) -> Response<bool>;

    /// Removes every event for which the predicate holds, per user.
    ///
    /// The predicate sees the user id alongside each event. Purely
    /// side-effecting; there is no aggregate result.
    fn delete_if(&self, user_ids: &[UserId], predicate: &mut dyn FnMut(&UserId, &Event) -> bool);

    /// Replaces each user's record with a fresh empty one.
    ///
    /// Clears the activity and resets the last-read marker to the
    /// epoch. Reports `true` per user iff they had at least one event.
    fn wipe(&self, user_ids: &[UserId]) -> Response<bool>;

    /// Returns each user's full activity, newest-first.
    fn fetch(&self, user_ids: &[UserId]) -> Response<Vec<Event>>;

    /// Returns one 1-based page of each user's newest-first activity.
    ///
    /// Unless `peek` is set, first resets every addressed user's
    /// last-read marker to now: viewing a page marks the feed as read.
    /// A `page` of `None` or `0` returns the whole activity; a page
    /// past the end returns an empty sequence.
    fn paginate(
        &self,
        user_ids: &[UserId],
        page: Option<usize>,
        per_page: usize,
        peek: bool,
    ) -> Response<Vec<Event>>;

    /// Sets each user's last-read marker and returns the value set.
    ///
    /// `at` defaults to now.
    fn reset_last_read(&self, user_ids: &[UserId], at: Option<Timestamp>) -> Response<Timestamp>;

    /// Returns each user's activity size.
    fn total_count(&self, user_ids: &[UserId]) -> Response<usize>;

    /// Returns, per user, how many events are strictly newer than their
    /// last-read marker.
    fn unread_count(&self, user_ids: &[UserId]) -> Response<usize>;

    /// Returns each user's current last-read marker.
    fn last_read(&self, user_ids: &[UserId]) -> Response<Timestamp>;

    /// Number of users with a materialized record.
    fn total_users(&self) -> usize;

    /// Best-effort estimate of the store's in-memory footprint in
    /// bytes. Diagnostic only; the exact algorithm is not a contract.
    fn total_memory_bytes(&self) -> usize;
}
