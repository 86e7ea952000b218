//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random feed inputs and operation
//! sequences that exercise the engine's invariants.

use proptest::prelude::*;
use tidemark_core::{Timestamp, UserId, Value};

/// Strategy for generating valid user ids.
pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}")
        .expect("Invalid regex")
        .prop_map(UserId::from)
}

/// Strategy for generating event payloads across all scalar variants.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        prop::string::string_regex("[ -~]{0,24}")
            .expect("Invalid regex")
            .prop_map(Value::from),
    ]
}

/// Strategy for generating event timestamps, including backdated ones.
pub fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (0.0f64..1.0e6).prop_map(Timestamp::from_secs)
}

/// One randomly chosen feed mutation.
#[derive(Debug, Clone)]
pub enum FeedOp {
    /// Store a value at a timestamp.
    Store(Value, Timestamp),
    /// Delete by value.
    Delete(Value),
    /// Wipe the record.
    Wipe,
    /// Reset the last-read marker.
    ResetLastRead(Timestamp),
}

/// Strategy for generating a feed mutation.
///
/// Values are drawn from a small integer pool so that duplicate stores
/// and matching deletes actually occur in generated sequences.
pub fn op_strategy() -> impl Strategy<Value = FeedOp> {
    let pooled_value = (0i64..16).prop_map(Value::Int);
    prop_oneof![
        4 => (pooled_value.clone(), timestamp_strategy())
            .prop_map(|(value, at)| FeedOp::Store(value, at)),
        2 => pooled_value.prop_map(FeedOp::Delete),
        1 => Just(FeedOp::Wipe),
        1 => timestamp_strategy().prop_map(FeedOp::ResetLastRead),
    ]
}
