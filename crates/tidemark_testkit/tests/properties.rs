//! Property-based tests for the feed engine invariants.
//!
//! These assert on observable outcomes only: bounded size, value
//! uniqueness, newest-first ordering, and pagination consistency hold
//! under arbitrary interleavings of stores, deletes, wipes, and marker
//! resets.

use proptest::prelude::*;
use tidemark_testkit::prelude::*;

const MAX_SIZE: usize = 8;

fn apply(feed: &Feed, user: &UserId, ops: &[FeedOp]) {
    let batch = [user.clone()];
    for op in ops {
        match op {
            FeedOp::Store(value, at) => {
                feed.store(&batch, value.clone(), Some(*at));
            }
            FeedOp::Delete(value) => {
                feed.delete(&batch, value, None);
            }
            FeedOp::Wipe => {
                feed.wipe(&batch);
            }
            FeedOp::ResetLastRead(at) => {
                feed.reset_last_read(&batch, Some(*at));
            }
        }
    }
}

proptest! {
    #[test]
    fn activity_never_exceeds_capacity(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);
        prop_assert!(feed.total_count_for(user) <= MAX_SIZE);
    }

    #[test]
    fn activity_never_contains_duplicate_values(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);

        let activity = feed.fetch_for(user);
        for (i, event) in activity.iter().enumerate() {
            for other in &activity[i + 1..] {
                prop_assert_ne!(&event.value, &other.value);
            }
        }
    }

    #[test]
    fn activity_is_always_newest_first(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);

        let activity = feed.fetch_for(user);
        for pair in activity.windows(2) {
            prop_assert!(pair[0].at >= pair[1].at);
        }
    }

    #[test]
    fn pages_concatenate_to_the_full_activity(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
        per_page in 1usize..6,
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);

        let full = feed.fetch_for(user.clone());
        let mut paged = Vec::new();
        let mut page = 1;
        loop {
            let slice = feed.paginate_for(user.clone(), Some(page), Some(per_page), true);
            if slice.is_empty() {
                break;
            }
            paged.extend(slice);
            page += 1;
        }

        prop_assert_eq!(full.len(), paged.len());
        for (a, b) in full.iter().zip(paged.iter()) {
            prop_assert_eq!(&a.value, &b.value);
            prop_assert_eq!(a.at, b.at);
        }
    }

    #[test]
    fn unread_count_matches_marker(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..64),
        marker in timestamp_strategy(),
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);

        feed.reset_last_read(&[user.clone()], Some(marker));
        let expected = feed
            .fetch_for(user.clone())
            .iter()
            .filter(|event| event.at > marker)
            .count();
        prop_assert_eq!(feed.unread_count_for(user), expected);
    }

    #[test]
    fn wipe_always_leaves_an_empty_record(
        user in user_id_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..32),
    ) {
        let feed = small_feed(MAX_SIZE);
        apply(&feed, &user, &ops);

        let had_events = feed.total_count_for(user.clone()) > 0;
        prop_assert_eq!(feed.wipe_for(user.clone()), had_events);
        prop_assert_eq!(feed.total_count_for(user.clone()), 0);
        prop_assert_eq!(feed.last_read_for(user), Timestamp::EPOCH);
    }
}
