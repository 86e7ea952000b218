//! In-memory feed backend.

use crate::backend::FeedBackend;
use crate::event::Event;
use crate::key::Key;
use crate::paginate::page_slice;
use crate::record::UserRecord;
use crate::response::Response;
use crate::types::{Timestamp, UserId};
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Shared record table: the map from [`Key`] to per-user record, plus
/// the global insertion-sequence counter used for ordering tie-breaks.
///
/// One table can back several [`MemoryBackend`] instances with
/// different namespaces, so multiple logical feeds share one store
/// without collision (the namespace is part of the key).
#[derive(Debug, Default)]
pub struct UserTable {
    records: RwLock<HashMap<Key, Arc<RwLock<UserRecord>>>>,
    next_seq: AtomicU64,
}

impl UserTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// The in-memory implementation of [`FeedBackend`].
///
/// Stores all records in a process-local map and is suitable for
/// single-process feeds, tests, and as the reference semantics for any
/// alternate backend. Nothing is persisted; dropping the backend drops
/// every record it exclusively owns.
///
/// # Thread Safety
///
/// The backend is thread-safe: the record map is guarded by one lock
/// held only to resolve or create a record, and each record carries its
/// own lock guarding read-modify-write sequences. Operations on
/// distinct users never contend on record locks.
#[derive(Debug)]
pub struct MemoryBackend {
    table: Arc<UserTable>,
    namespace: Option<String>,
    max_size: usize,
}

impl MemoryBackend {
    /// Creates a backend with a fresh private table.
    ///
    /// `max_size` is the per-user activity capacity; a zero capacity is
    /// a configuration defect that [`FeedConfig`](crate::FeedConfig)
    /// rejects before a backend is ever built.
    #[must_use]
    pub fn new(max_size: usize, namespace: Option<String>) -> Self {
        Self::with_table(Arc::new(UserTable::new()), max_size, namespace)
    }

    /// Creates a backend over a shared table.
    ///
    /// Backends with distinct namespaces on the same table address
    /// disjoint records.
    #[must_use]
    pub fn with_table(table: Arc<UserTable>, max_size: usize, namespace: Option<String>) -> Self {
        Self {
            table,
            namespace,
            max_size,
        }
    }

    /// The shared record table, for building sibling backends.
    #[must_use]
    pub fn table(&self) -> Arc<UserTable> {
        Arc::clone(&self.table)
    }

    /// This backend's per-user capacity.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// This backend's namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn key_for(&self, user_id: &UserId) -> Key {
        Key::new(self.namespace.clone(), user_id.clone())
    }

    /// Resolves (or lazily creates) the record for one user and runs an
    /// operation against it under that record's exclusive lock.
    ///
    /// The map lock is released before the record lock is taken, so
    /// concurrent operations on distinct users do not serialize.
    fn with_record<R>(&self, user_id: &UserId, op: impl FnOnce(&mut UserRecord) -> R) -> R {
        let key = self.key_for(user_id);
        let record = {
            let records = self.table.records.read();
            records.get(&key).cloned()
        };
        let record = match record {
            Some(record) => record,
            None => {
                let mut records = self.table.records.write();
                Arc::clone(
                    records
                        .entry(key)
                        .or_insert_with(|| Arc::new(RwLock::new(UserRecord::new()))),
                )
            }
        };
        let mut guard = record.write();
        op(&mut guard)
    }

    /// The batching combinator behind every operation: for each
    /// identity, resolve the key, get-or-create the record, run the
    /// per-user op, and collect the results.
    fn for_each<R>(
        &self,
        user_ids: &[UserId],
        mut op: impl FnMut(&UserId, &mut UserRecord) -> R,
    ) -> Response<R> {
        user_ids
            .iter()
            .map(|user_id| {
                let result = self.with_record(user_id, |record| op(user_id, record));
                (user_id.clone(), result)
            })
            .collect()
    }

    fn next_seq(&self) -> u64 {
        self.table.next_seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl FeedBackend for MemoryBackend {
    fn store(&self, user_ids: &[UserId], value: Value, at: Option<Timestamp>) -> Response<bool> {
        let at = at.unwrap_or_else(Timestamp::now);
        self.for_each(user_ids, |user_id, record| {
            let seq = self.next_seq();
            let stored = record.insert(Event::new(value.clone(), at), seq, self.max_size);
            if stored {
                trace!(user = %user_id, %at, "stored event");
            } else {
                debug!(user = %user_id, "duplicate value, store skipped");
            }
            stored
        })
    }

    fn delete(&self, user_ids: &[UserId], value: &Value, _at: Option<Timestamp>) -> Response<bool> {
        self.for_each(user_ids, |user_id, record| {
            let removed = record.remove_value(value);
            if removed {
                trace!(user = %user_id, "deleted event");
            }
            removed
        })
    }

    fn delete_if(&self, user_ids: &[UserId], predicate: &mut dyn FnMut(&UserId, &Event) -> bool) {
        self.for_each(user_ids, |user_id, record| {
            record.retain(|event| !predicate(user_id, event));
        });
    }

    fn wipe(&self, user_ids: &[UserId]) -> Response<bool> {
        self.for_each(user_ids, |user_id, record| {
            let had_events = !record.is_empty();
            *record = UserRecord::new();
            debug!(user = %user_id, had_events, "wiped record");
            had_events
        })
    }

    fn fetch(&self, user_ids: &[UserId]) -> Response<Vec<Event>> {
        self.for_each(user_ids, |_, record| record.events())
    }

    fn paginate(
        &self,
        user_ids: &[UserId],
        page: Option<usize>,
        per_page: usize,
        peek: bool,
    ) -> Response<Vec<Event>> {
        // Viewing a page marks the feed as read, unless peeking.
        if !peek {
            self.reset_last_read(user_ids, None);
        }
        self.for_each(user_ids, |_, record| {
            page_slice(&record.events(), page, per_page)
        })
    }

    fn reset_last_read(&self, user_ids: &[UserId], at: Option<Timestamp>) -> Response<Timestamp> {
        let at = at.unwrap_or_else(Timestamp::now);
        self.for_each(user_ids, |user_id, record| {
            record.set_last_read(at);
            trace!(user = %user_id, %at, "reset last-read marker");
            at
        })
    }

    fn total_count(&self, user_ids: &[UserId]) -> Response<usize> {
        self.for_each(user_ids, |_, record| record.len())
    }

    fn unread_count(&self, user_ids: &[UserId]) -> Response<usize> {
        self.for_each(user_ids, |_, record| record.unread())
    }

    fn last_read(&self, user_ids: &[UserId]) -> Response<Timestamp> {
        self.for_each(user_ids, |_, record| record.last_read())
    }

    fn total_users(&self) -> usize {
        self.table.records.read().len()
    }

    fn total_memory_bytes(&self) -> usize {
        // Approximated as the CBOR-serialized size of every record plus
        // the key text; not exact, and not a contract.
        let records = self.table.records.read();
        records
            .iter()
            .map(|(key, record)| {
                let mut buf = Vec::new();
                if ciborium::ser::into_writer(&*record.read(), &mut buf).is_err() {
                    buf.clear();
                }
                key.to_string().len() + buf.len()
            })
            .sum()
    }
}
