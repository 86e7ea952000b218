//! Per-user mutable state.

use crate::event::Event;
use crate::types::Timestamp;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One stored entry: the event plus the global insertion sequence that
/// breaks ordering ties between equal timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Stored {
    seq: u64,
    event: Event,
}

/// Mutable state held for one [`Key`](crate::Key): the last-read marker
/// and the bounded, deduplicated activity set.
///
/// The activity is kept materialized newest-first (`at` descending,
/// insertion sequence ascending on ties). After every insert the order
/// is re-derived and everything beyond the capacity is dropped, so the
/// evicted entry is always the oldest by timestamp — a backdated insert
/// may be evicted by its own store call.
///
/// Invariants after any mutation:
/// - `len() <= max_size` passed to the mutation
/// - no two entries share an equal `value`
/// - `last_read` moves only through [`set_last_read`](Self::set_last_read)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    last_read: Timestamp,
    activity: Vec<Stored>,
}

impl UserRecord {
    /// Creates an empty record: no activity, last-read at the epoch.
    ///
    /// This is the single factory through which records enter the store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event, deduplicating by value and evicting down to
    /// `max_size` entries.
    ///
    /// Returns `false` (and leaves the record untouched) if an event
    /// with an equal value is already present; `true` if the event was
    /// inserted, even when capacity eviction removed it again in the
    /// same call.
    pub fn insert(&mut self, event: Event, seq: u64, max_size: usize) -> bool {
        if self.contains(&event.value) {
            return false;
        }
        self.activity.push(Stored { seq, event });
        self.activity.sort_by(|a, b| {
            b.event
                .at
                .cmp(&a.event.at)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        self.activity.truncate(max_size);
        true
    }

    /// Removes the event with an equal value, if present.
    ///
    /// Returns `true` iff the activity shrank.
    pub fn remove_value(&mut self, value: &Value) -> bool {
        let before = self.activity.len();
        self.activity.retain(|s| &s.event.value != value);
        self.activity.len() < before
    }

    /// Removes every event for which the predicate holds.
    pub fn retain(&mut self, mut keep: impl FnMut(&Event) -> bool) {
        self.activity.retain(|s| keep(&s.event));
    }

    /// Returns `true` if an event with this value is stored.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.activity.iter().any(|s| &s.event.value == value)
    }

    /// Number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activity.len()
    }

    /// Returns `true` if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity.is_empty()
    }

    /// The current last-read marker.
    #[must_use]
    pub fn last_read(&self) -> Timestamp {
        self.last_read
    }

    /// Resets the last-read marker.
    pub fn set_last_read(&mut self, at: Timestamp) {
        self.last_read = at;
    }

    /// Number of events strictly newer than the last-read marker.
    #[must_use]
    pub fn unread(&self) -> usize {
        self.activity
            .iter()
            .filter(|s| s.event.at > self.last_read)
            .count()
    }

    /// The full activity, newest-first.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.activity.iter().map(|s| s.event.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(value: &str, at: f64) -> Event {
        Event::new(Value::from(value), Timestamp::from_secs(at))
    }

    #[test]
    fn insert_deduplicates_by_value() {
        let mut rec = UserRecord::new();
        assert!(rec.insert(ev("a", 1.0), 0, 10));
        assert!(!rec.insert(ev("a", 2.0), 1, 10));
        assert_eq!(rec.len(), 1);
        // The original timestamp survives the duplicate store.
        assert_eq!(rec.events()[0].at, Timestamp::from_secs(1.0));
    }

    #[test]
    fn events_are_newest_first() {
        let mut rec = UserRecord::new();
        rec.insert(ev("a", 1.0), 0, 10);
        rec.insert(ev("b", 3.0), 1, 10);
        rec.insert(ev("c", 2.0), 2, 10);
        let order: Vec<_> = rec
            .events()
            .into_iter()
            .map(|e| e.value.as_text().unwrap().to_owned())
            .collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let mut rec = UserRecord::new();
        rec.insert(ev("first", 5.0), 0, 10);
        rec.insert(ev("second", 5.0), 1, 10);
        let order: Vec<_> = rec
            .events()
            .into_iter()
            .map(|e| e.value.as_text().unwrap().to_owned())
            .collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn eviction_drops_the_oldest() {
        let mut rec = UserRecord::new();
        rec.insert(ev("old", 1.0), 0, 2);
        rec.insert(ev("mid", 2.0), 1, 2);
        rec.insert(ev("new", 3.0), 2, 2);
        assert_eq!(rec.len(), 2);
        assert!(!rec.contains(&Value::from("old")));
    }

    #[test]
    fn backdated_insert_can_evict_itself() {
        let mut rec = UserRecord::new();
        rec.insert(ev("a", 10.0), 0, 2);
        rec.insert(ev("b", 20.0), 1, 2);
        // Oldest by timestamp, so it is the one dropped.
        assert!(rec.insert(ev("stale", 1.0), 2, 2));
        assert!(!rec.contains(&Value::from("stale")));
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn remove_value_ignores_timestamp() {
        let mut rec = UserRecord::new();
        rec.insert(ev("a", 1.0), 0, 10);
        assert!(rec.remove_value(&Value::from("a")));
        assert!(!rec.remove_value(&Value::from("a")));
        assert!(rec.is_empty());
    }

    #[test]
    fn unread_counts_strictly_newer() {
        let mut rec = UserRecord::new();
        rec.insert(ev("a", 1.0), 0, 10);
        rec.insert(ev("b", 2.0), 1, 10);
        rec.set_last_read(Timestamp::from_secs(1.0));
        assert_eq!(rec.unread(), 1);
        rec.set_last_read(Timestamp::from_secs(2.0));
        assert_eq!(rec.unread(), 0);
    }

    #[test]
    fn retain_filters_events() {
        let mut rec = UserRecord::new();
        rec.insert(ev("keep", 1.0), 0, 10);
        rec.insert(ev("drop", 2.0), 1, 10);
        rec.retain(|e| e.value.as_text() == Some("keep"));
        assert_eq!(rec.len(), 1);
        assert!(rec.contains(&Value::from("keep")));
    }
}
