use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistEntryDb {
    id: i64,
    email: String,
    name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn list_newest_first(&self, offset: i64, limit: i64) -> AppResult<Vec<WaitlistEntry>> {
        let rows = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                SELECT id, email, name, created_at, updated_at
                FROM waitlist
                ORDER BY created_at DESC, id DESC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(WaitlistEntry::from).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)?;
        Ok(count)
    }
}
