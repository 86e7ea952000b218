//! Demo command implementation.

use tidemark_core::{Feed, FeedConfig, Timestamp, UserId, Value};
use tracing::debug;

/// Runs the demo command: seeds a feed and walks through the operation
/// surface, printing what a consumer would observe at each step.
pub fn run(
    users: usize,
    events: usize,
    max_size: usize,
    per_page: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let feed = Feed::new(
        FeedConfig::new()
            .max_size(max_size)
            .per_page(per_page)
            .namespace("demo"),
    )?;

    let user_ids: Vec<UserId> = (1..=users as u64).map(UserId::from).collect();

    println!(
        "Seeding {users} user(s) with {events} event(s) each (capacity {max_size})\n"
    );
    let base = Timestamp::now().as_secs();
    for i in 0..events {
        let value = Value::from(format!("event #{i}"));
        let at = Timestamp::from_secs(base + i as f64);
        feed.store(&user_ids, value, Some(at));
    }
    debug!(users, events, "seeded demo feed");

    // Duplicates are rejected by value, whatever their timestamp.
    let dup = feed.store(&user_ids, Value::from("event #0"), None);
    println!(
        "Re-storing \"event #0\": accepted for {} of {} user(s) (duplicates are no-ops)",
        dup.iter().filter(|(_, stored)| **stored).count(),
        dup.len()
    );

    for (user_id, count) in feed.total_count(&user_ids).iter() {
        println!(
            "user {user_id}: {count} event(s) retained, {} unread",
            feed.unread_count_for(user_id.clone())
        );
    }

    if let Some(first) = user_ids.first() {
        println!("\nPaging through user {first}'s activity ({per_page} per page):");
        let mut page = 1;
        loop {
            // Peek so the walkthrough doesn't reset the marker early.
            let slice = feed.paginate_for(first.clone(), Some(page), None, true);
            if slice.is_empty() {
                break;
            }
            for event in &slice {
                println!("  page {page}: {event}");
            }
            page += 1;
        }

        println!("\nViewing page 1 for real (advances the read marker):");
        feed.paginate_for(first.clone(), Some(1), None, false);
        println!(
            "  user {first} now has {} unread event(s)",
            feed.unread_count_for(first.clone())
        );

        println!("\nWiping user {first}:");
        let had_events = feed.wipe_for(first.clone());
        println!(
            "  wiped (had events: {had_events}), count is now {}",
            feed.total_count_for(first.clone())
        );
    }

    println!(
        "\nStore totals: {} user(s), ~{} bytes",
        feed.total_users(),
        feed.total_memory_bytes()
    );

    Ok(())
}
