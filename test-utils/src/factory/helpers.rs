//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a timestamp `offset_secs` seconds after a fixed base instant.
///
/// Factories that need a deterministic ordering on timestamp columns use this instead of
/// `Utc::now()`, which can return identical values for rows inserted back to back.
pub fn timestamp(offset_secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_767_225_600, 0).unwrap_or_default()
        + Duration::seconds(offset_secs)
}
