//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Fixed timestamp used as the base for all fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        email: "jane@example.com".to_string(),
        name: Some("Jane Doe".to_string()),
        created_at: test_datetime(),
        updated_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Create `count` entries with ids `1..=count`.
///
/// Consecutive ids share a `created_at` (ids 1 and 2, 3 and 4, ...) so ordering has to fall
/// back to the id. Every third entry has no name, and emails carry mixed case.
pub fn create_test_entries(count: usize) -> Vec<WaitlistEntry> {
    (1..=count as i64)
        .map(|id| {
            create_test_entry(|e| {
                e.id = id;
                e.email = format!("User{id}@Example.com");
                e.name = (id % 3 != 0).then(|| format!("User {id}"));
                e.created_at = test_datetime() + Duration::minutes((id + 1) / 2);
                e.updated_at = e.created_at;
            })
        })
        .collect()
}
