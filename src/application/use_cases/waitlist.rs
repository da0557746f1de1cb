use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::AppResult;
use crate::application::pagination::PageRequest;
use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Read-only view of the waitlist table.
///
/// Implementations must order rows by `created_at` descending with `id` descending as the
/// tie breaker, so that consecutive offsets never repeat or skip an entry.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn list_newest_first(&self, offset: i64, limit: i64) -> AppResult<Vec<WaitlistEntry>>;
    async fn count(&self) -> AppResult<i64>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistPage {
    pub entries: Vec<WaitlistEntry>,
    pub total: i64,
    pub has_more: bool,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Fetches one page of entries together with the total row count.
    ///
    /// The rows and the count are read concurrently and not inside a shared transaction,
    /// so `has_more` reflects the count as of its own read.
    #[instrument(skip(self))]
    pub async fn list(&self, request: PageRequest) -> AppResult<WaitlistPage> {
        let (entries, total) = tokio::try_join!(
            self.repo
                .list_newest_first(request.offset(), request.limit()),
            self.repo.count(),
        )?;

        let has_more = request.has_more(entries.len(), total);

        Ok(WaitlistPage {
            entries,
            total,
            has_more,
        })
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }
}
