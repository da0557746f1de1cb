//! In-memory mock implementations for the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    list_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Simulates a signup arriving from outside the dashboard.
    pub fn insert(&self, entry: WaitlistEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn list_newest_first(&self, offset: i64, limit: i64) -> AppResult<Vec<WaitlistEntry>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(entries
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().len() as i64)
    }
}

/// Repo whose every call fails as if the database were down.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn list_newest_first(&self, _offset: i64, _limit: i64) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_entries, create_test_entry};

    #[tokio::test]
    async fn test_list_orders_by_created_at_then_id() {
        let repo = InMemoryWaitlistRepo::with_entries(create_test_entries(4));

        let ids: Vec<i64> = repo
            .list_newest_first(0, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let repo = InMemoryWaitlistRepo::with_entries(create_test_entries(3));

        let rows = repo.list_newest_first(10, 10).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_insert_changes_count() {
        let repo = InMemoryWaitlistRepo::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(create_test_entry(|_| {}));

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.count_calls(), 2);
    }
}
