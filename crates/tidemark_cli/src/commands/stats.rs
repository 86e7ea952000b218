//! Stats command implementation.

use serde::Serialize;
use tidemark_core::{Feed, FeedConfig, Timestamp, UserId, Value};

/// Store-level diagnostics after seeding.
#[derive(Debug, Serialize)]
pub struct StatsResult {
    /// Users seeded.
    pub users_seeded: usize,
    /// Events stored per user.
    pub events_per_user: usize,
    /// Per-user capacity.
    pub max_size: usize,
    /// Users with a materialized record.
    pub total_users: usize,
    /// Events retained for the first user after eviction.
    pub retained_per_user: usize,
    /// Approximate in-memory footprint in bytes.
    pub total_memory_bytes: usize,
}

/// Runs the stats command.
pub fn run(
    users: usize,
    events: usize,
    max_size: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let feed = Feed::new(FeedConfig::new().max_size(max_size))?;

    let user_ids: Vec<UserId> = (1..=users as u64).map(UserId::from).collect();
    let base = Timestamp::now().as_secs();
    for i in 0..events {
        feed.store(
            &user_ids,
            Value::from(format!("seeded event #{i}")),
            Some(Timestamp::from_secs(base + i as f64)),
        );
    }

    let retained = user_ids
        .first()
        .map(|first| feed.total_count_for(first.clone()))
        .unwrap_or_default();

    let result = StatsResult {
        users_seeded: users,
        events_per_user: events,
        max_size,
        total_users: feed.total_users(),
        retained_per_user: retained,
        total_memory_bytes: feed.total_memory_bytes(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            println!("Users seeded:      {}", result.users_seeded);
            println!("Events per user:   {}", result.events_per_user);
            println!("Capacity:          {}", result.max_size);
            println!("Materialized keys: {}", result.total_users);
            println!("Retained per user: {}", result.retained_per_user);
            println!("Approx. footprint: {} bytes", result.total_memory_bytes);
        }
    }

    Ok(())
}
