//! Feed fixtures for tests.

use tidemark_core::{Feed, FeedConfig, Timestamp, UserId, Value};

/// Builds a feed with the given capacity and small defaults.
///
/// # Panics
///
/// Panics if `max_size` is zero; fixtures are for tests, where a bad
/// capacity is a bug in the test itself.
#[must_use]
pub fn small_feed(max_size: usize) -> Feed {
    Feed::new(FeedConfig::new().max_size(max_size).per_page(3))
        .expect("fixture config must be valid")
}

/// Builds a feed and seeds `events` distinct entries per user at
/// timestamps `1.0, 2.0, ...` so tests can reason about order exactly.
///
/// # Panics
///
/// Panics if `max_size` is zero.
#[must_use]
pub fn seeded_feed(max_size: usize, user_ids: &[UserId], events: usize) -> Feed {
    let feed = small_feed(max_size);
    for i in 0..events {
        feed.store(
            user_ids,
            Value::from(format!("seed #{i}")),
            Some(Timestamp::from_secs(1.0 + i as f64)),
        );
    }
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feed_respects_capacity() {
        let users = [UserId::from("u")];
        let feed = seeded_feed(3, &users, 10);
        assert_eq!(feed.total_count_for("u"), 3);
    }

    #[test]
    fn seeded_feed_is_newest_first() {
        let users = [UserId::from("u")];
        let feed = seeded_feed(5, &users, 5);
        let activity = feed.fetch_for("u");
        assert_eq!(activity[0].value, Value::from("seed #4"));
        assert_eq!(activity[4].value, Value::from("seed #0"));
    }
}
