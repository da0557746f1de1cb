//! Dashboard state machine.
//!
//! [`DashboardState::dispatch`] is the only way to change state. It returns the fetches the
//! driver has to run; their results come back as [`Command::ListLoaded`] and
//! [`Command::CountLoaded`] carrying the sequence number they were issued with.

use crate::app_error::AppResult;
use crate::application::pagination::PageRequest;
use crate::application::use_cases::waitlist::WaitlistPage;

use super::table::{Column, ColumnFilter, SortState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug)]
pub enum Command {
    Previous,
    Next,
    Refresh,
    SetSorting(Option<SortState>),
    SetFilter { column: Column, value: String },
    ClearFilters,
    ListLoaded {
        seq: u64,
        result: AppResult<WaitlistPage>,
    },
    CountLoaded {
        seq: u64,
        result: AppResult<i64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchList { seq: u64, request: PageRequest },
    FetchCount { seq: u64 },
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    page: u32,
    sorting: Option<SortState>,
    filters: Vec<ColumnFilter>,
    list: FetchState<WaitlistPage>,
    total_count: Option<i64>,
    last_seq: u64,
    list_seq: Option<u64>,
    count_seq: Option<u64>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::at_page(0)
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State positioned on `page` with nothing fetched yet. Dispatch [`Command::Refresh`]
    /// to load it.
    pub fn at_page(page: u32) -> Self {
        Self {
            page,
            sorting: None,
            filters: Vec::new(),
            list: FetchState::Idle,
            total_count: None,
            last_seq: 0,
            list_seq: None,
            count_seq: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn sorting(&self) -> Option<&SortState> {
        self.sorting.as_ref()
    }

    pub fn filters(&self) -> &[ColumnFilter] {
        &self.filters
    }

    pub fn list(&self) -> &FetchState<WaitlistPage> {
        &self.list
    }

    /// Total from the most recent successful count fetch.
    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 0
    }

    /// Only a completed fetch that reported more rows enables `Next`.
    pub fn can_go_next(&self) -> bool {
        matches!(&self.list, FetchState::Loaded(page) if page.has_more)
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Previous => {
                if !self.can_go_previous() {
                    return Vec::new();
                }
                self.page -= 1;
                self.issue_fetches()
            }
            Command::Next => {
                if !self.can_go_next() {
                    return Vec::new();
                }
                self.page = self.page.saturating_add(1);
                self.issue_fetches()
            }
            Command::Refresh => self.issue_fetches(),
            Command::SetSorting(sorting) => {
                self.sorting = sorting;
                Vec::new()
            }
            Command::SetFilter { column, value } => {
                self.filters.retain(|f| f.column != column);
                let value = value.trim();
                if !value.is_empty() {
                    self.filters.push(ColumnFilter {
                        column,
                        value: value.to_string(),
                    });
                }
                Vec::new()
            }
            Command::ClearFilters => {
                self.filters.clear();
                Vec::new()
            }
            Command::ListLoaded { seq, result } => {
                if self.list_seq != Some(seq) {
                    tracing::debug!(seq, latest = ?self.list_seq, "Dropping stale list response");
                    return Vec::new();
                }
                self.list = match result {
                    Ok(page) => FetchState::Loaded(page),
                    Err(err) => FetchState::Failed(err.to_string()),
                };
                Vec::new()
            }
            Command::CountLoaded { seq, result } => {
                if self.count_seq != Some(seq) {
                    tracing::debug!(seq, latest = ?self.count_seq, "Dropping stale count response");
                    return Vec::new();
                }
                match result {
                    Ok(count) => self.total_count = Some(count),
                    Err(err) => {
                        tracing::warn!(error = %err, "Count fetch failed, keeping previous total");
                    }
                }
                Vec::new()
            }
        }
    }

    fn issue_fetches(&mut self) -> Vec<Effect> {
        let list_seq = self.next_seq();
        let count_seq = self.next_seq();
        self.list_seq = Some(list_seq);
        self.count_seq = Some(count_seq);
        // Never show the previous page's rows while the new one loads.
        self.list = FetchState::Loading;

        vec![
            Effect::FetchList {
                seq: list_seq,
                request: PageRequest::for_page(self.page),
            },
            Effect::FetchCount { seq: count_seq },
        ]
    }

    fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }
}
