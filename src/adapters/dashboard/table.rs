//! Column model and local row arrangement for the waitlist table.
//!
//! Sorting and filtering only rearrange rows of the page that was already fetched. They
//! never widen or narrow what is requested from storage.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;

use crate::domain::entities::waitlist_entry::WaitlistEntry;

pub const COLUMNS: [Column; 4] = [Column::Id, Column::Name, Column::Email, Column::CreatedAt];

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Email,
    CreatedAt,
}

impl Column {
    pub fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Email => "email",
            Column::CreatedAt => "createdAt",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::CreatedAt => "Created At",
        }
    }

    /// Text shown in the cell, or `None` when the value is absent.
    pub fn display_value(&self, entry: &WaitlistEntry, offset: &FixedOffset) -> Option<String> {
        match self {
            Column::Id => Some(entry.id.to_string()),
            Column::Name => entry.name.clone(),
            // Lowercased for display only; storage and comparisons keep the original.
            Column::Email => Some(entry.email.to_lowercase()),
            Column::CreatedAt => Some(format_local(entry, offset)),
        }
    }

    fn compare(&self, a: &WaitlistEntry, b: &WaitlistEntry) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::Name => match (&a.name, &b.name) {
                (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Column::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            Column::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl FromStr for Column {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLUMNS.into_iter().find(|c| c.key() == s).ok_or(())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn format_local(entry: &WaitlistEntry, offset: &FixedOffset) -> String {
    entry
        .created_at
        .with_timezone(offset)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    /// Sorting after a click on `column`'s header: none -> asc -> desc -> none.
    pub fn toggled(current: Option<SortState>, column: Column) -> Option<SortState> {
        match current {
            Some(SortState {
                column: c,
                direction: SortDirection::Asc,
            }) if c == column => Some(SortState {
                column,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                column: c,
                direction: SortDirection::Desc,
            }) if c == column => None,
            _ => Some(SortState {
                column,
                direction: SortDirection::Asc,
            }),
        }
    }
}

/// Parses `column:asc` / `column:desc`.
impl FromStr for SortState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = s.split_once(':').ok_or(())?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(()),
        };
        Ok(SortState {
            column: column.parse()?,
            direction,
        })
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.direction.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: Column,
    pub value: String,
}

impl ColumnFilter {
    /// Case-insensitive substring match on the cell's display text. Absent values never match.
    pub fn matches(&self, entry: &WaitlistEntry, offset: &FixedOffset) -> bool {
        let needle = self.value.to_lowercase();
        self.column
            .display_value(entry, offset)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

/// Applies filters, then sorting, to an already-fetched page. Ties keep fetch order.
pub fn arrange<'a>(
    entries: &'a [WaitlistEntry],
    sorting: Option<&SortState>,
    filters: &[ColumnFilter],
    offset: &FixedOffset,
) -> Vec<&'a WaitlistEntry> {
    let mut rows: Vec<&WaitlistEntry> = entries
        .iter()
        .filter(|e| filters.iter().all(|f| f.matches(e, offset)))
        .collect();

    if let Some(sort) = sorting {
        rows.sort_by(|a, b| {
            let ord = sort.column.compare(a, b);
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    rows
}
