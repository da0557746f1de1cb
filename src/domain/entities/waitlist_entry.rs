use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single waitlist registration, as observed by the dashboard.
///
/// Entries are created and removed outside this service; nothing here mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    /// `None` is a permanent state, not a placeholder.
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
