//! Offset pagination parameters for the waitlist listing.

use crate::app_error::{AppError, AppResult};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request. Only [`PageRequest::new`] builds one, so anything holding a
/// `PageRequest` has already passed the range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
    offset: i64,
}

impl PageRequest {
    /// Validates raw `page`/`limit` values, filling in defaults for missing ones.
    ///
    /// Rules:
    /// - `page` must be >= 0 (default 0)
    /// - `limit` must be within 1..=100 (default 100)
    /// - `page * limit` must fit in an i64
    pub fn new(page: Option<i64>, limit: Option<i64>) -> AppResult<Self> {
        let page = page.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 0 {
            return Err(AppError::InvalidInput("page must be 0 or greater".into()));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::InvalidInput(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        let offset = page
            .checked_mul(limit)
            .ok_or_else(|| AppError::InvalidInput("page is too large".into()))?;

        Ok(Self {
            page,
            limit,
            offset,
        })
    }

    /// Default-sized request for a page index that is already known to be non-negative.
    pub fn for_page(page: u32) -> Self {
        let page = i64::from(page);
        Self {
            page,
            limit: DEFAULT_PAGE_SIZE,
            offset: page * DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of leading rows to skip.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Whether rows remain past this page, given how many it returned and the total.
    pub fn has_more(&self, returned: usize, total: i64) -> bool {
        self.offset.saturating_add(returned as i64) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}
