//! Feed entries.

use crate::types::Timestamp;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single entry in a user's activity feed.
///
/// Equality and hashing consider only the payload `value` — the
/// timestamp is deliberately excluded, so re-storing the same value at
/// a different time is a duplicate, not a new event. This is what makes
/// value-keyed deletion and store-time deduplication work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque payload; the identity of the event.
    pub value: Value,
    /// When the event occurred.
    pub at: Timestamp,
}

impl Event {
    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub fn new(value: Value, at: Timestamp) -> Self {
        Self { value, at }
    }

    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn now(value: Value) -> Self {
        Self {
            value,
            at: Timestamp::now(),
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_timestamp() {
        let a = Event::new(Value::from("x"), Timestamp::from_secs(1.0));
        let b = Event::new(Value::from("x"), Timestamp::from_secs(99.0));
        assert_eq!(a, b);
    }

    #[test]
    fn inequality_by_value() {
        let a = Event::new(Value::from("x"), Timestamp::from_secs(1.0));
        let b = Event::new(Value::from("y"), Timestamp::from_secs(1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_ignores_timestamp() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Event::new(Value::from("x"), Timestamp::from_secs(1.0)));
        set.insert(Event::new(Value::from("x"), Timestamp::from_secs(2.0)));
        assert_eq!(set.len(), 1);
    }
}
