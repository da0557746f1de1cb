//! HTML rendering for the dashboard page. Pure: same state and options, same markup.

use chrono::{FixedOffset, Offset, Utc};
use url::form_urlencoded;

use crate::application::pagination::DEFAULT_PAGE_SIZE;

use super::state::{DashboardState, FetchState};
use super::table::{COLUMNS, Column, SortDirection, SortState, arrange};

const TITLE: &str = "Waitlist Dashboard";
const LOADING_TEXT: &str = "Loading waitlist entries...";
const FAILED_TEXT: &str = "Failed to load waitlist entries.";
const EMPTY_TEXT: &str = "No entries found.";
const MISSING_NAME: &str = "N/A";

const STYLE: &str = "body{margin:0;background:#000;color:#fff;font-family:system-ui,sans-serif}\
main{max-width:1100px;margin:0 auto;padding:64px 16px;display:flex;flex-direction:column;gap:24px}\
h1{font-size:3rem;text-align:center;margin:0}\
.panel{border:1px solid rgba(255,255,255,.1);background:rgba(255,255,255,.05);border-radius:8px;padding:16px 24px}\
.summary{display:flex;justify-content:space-between;align-items:center}\
.muted{color:rgba(255,255,255,.6);font-size:.875rem}\
.total{font-size:1.875rem;font-weight:700;text-align:right}\
table{width:100%;border-collapse:collapse}\
th,td{text-align:left;padding:10px 8px;border-bottom:1px solid rgba(255,255,255,.1)}\
th a{color:inherit;text-decoration:none}\
.missing{color:rgba(255,255,255,.4);font-style:italic}\
.empty{text-align:center;height:6rem;color:rgba(255,255,255,.6)}\
.pager{display:flex;justify-content:space-between;align-items:center}\
.button{border:1px solid rgba(255,255,255,.2);border-radius:6px;padding:6px 12px;color:#fff;text-decoration:none}\
.button.disabled{opacity:.5;pointer-events:none}";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Offset used to show `createdAt` as local date and time.
    pub utc_offset: FixedOffset,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

/// Renders the full dashboard document.
pub fn render(state: &DashboardState, options: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<h1>{TITLE}</h1>
{section}
</main>
</body>
</html>
"#,
        section = render_section(state, options),
    )
}

/// Renders the waitlist section: summary, table and pager, or a placeholder.
pub fn render_section(state: &DashboardState, options: &RenderOptions) -> String {
    match state.list() {
        FetchState::Idle | FetchState::Loading => {
            format!(r#"<div class="panel muted" role="status">{LOADING_TEXT}</div>"#)
        }
        FetchState::Failed(_) => {
            format!(r#"<div class="panel muted" role="alert">{FAILED_TEXT}</div>"#)
        }
        FetchState::Loaded(page) => {
            let rows = arrange(
                &page.entries,
                state.sorting(),
                state.filters(),
                &options.utc_offset,
            );
            let body = if rows.is_empty() {
                format!(
                    r#"<tr><td class="empty" colspan="{}">{EMPTY_TEXT}</td></tr>"#,
                    COLUMNS.len()
                )
            } else {
                rows.iter()
                    .map(|entry| {
                        let cells: String = COLUMNS
                            .iter()
                            .map(|column| match column.display_value(entry, &options.utc_offset) {
                                Some(text) => format!("<td>{}</td>", escape_html(&text)),
                                None => format!(r#"<td><span class="missing">{MISSING_NAME}</span></td>"#),
                            })
                            .collect();
                        format!("<tr>{cells}</tr>")
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            let first_row = i64::from(state.page()) * DEFAULT_PAGE_SIZE;
            format!(
                r#"{summary}
{filter_form}
<div class="panel">
<table>
<thead><tr>{headers}</tr></thead>
<tbody>
{body}
</tbody>
</table>
</div>
<div class="panel pager">
<div class="muted">Showing <strong>{from}</strong> to <strong>{to}</strong> of <strong>{total}</strong> entries</div>
<div>{previous} <span class="muted">Page <strong>{page_number}</strong></span> {next}</div>
</div>"#,
                summary = render_summary(state),
                filter_form = render_filter_form(state),
                headers = render_headers(state),
                from = first_row + 1,
                to = first_row + page.entries.len() as i64,
                total = page.total,
                previous = pager_link(
                    "Previous",
                    state.can_go_previous(),
                    state,
                    state.page().saturating_sub(1)
                ),
                page_number = u64::from(state.page()) + 1,
                next = pager_link(
                    "Next",
                    state.can_go_next(),
                    state,
                    state.page().saturating_add(1)
                ),
            )
        }
    }
}

fn render_summary(state: &DashboardState) -> String {
    format!(
        r#"<div class="panel summary">
<div><h2>Waitlist Entries</h2><p class="muted">Manage and view all waitlist registrations</p></div>
<div><div class="total">{}</div><p class="muted">Total Entries</p></div>
</div>"#,
        state.total_count().unwrap_or(0)
    )
}

fn render_headers(state: &DashboardState) -> String {
    COLUMNS
        .iter()
        .map(|column| {
            let next_sort = SortState::toggled(state.sorting().copied(), *column);
            let marker = match state.sorting() {
                Some(sort) if sort.column == *column => match sort.direction {
                    SortDirection::Asc => " &#9650;",
                    SortDirection::Desc => " &#9660;",
                },
                _ => "",
            };
            format!(
                r#"<th><a href="{href}">{header}{marker}</a></th>"#,
                href = escape_html(&page_href(state.page(), next_sort.as_ref(), state)),
                header = column.header(),
            )
        })
        .collect()
}

fn render_filter_form(state: &DashboardState) -> String {
    let active = state.filters().first();
    let selected_column = active.map(|f| f.column).unwrap_or(Column::Email);
    let options: String = COLUMNS
        .iter()
        .map(|column| {
            let selected = if *column == selected_column { " selected" } else { "" };
            format!(
                r#"<option value="{key}"{selected}>{header}</option>"#,
                key = column.key(),
                header = column.header(),
            )
        })
        .collect();
    let sort_input = state
        .sorting()
        .map(|sort| format!(r#"<input type="hidden" name="sort" value="{sort}">"#))
        .unwrap_or_default();

    format!(
        r#"<form class="panel" method="get" action="/">
<input type="hidden" name="page" value="{page}">{sort_input}
<select name="filter_by">{options}</select>
<input type="search" name="filter" placeholder="Filter this page" value="{value}">
<button type="submit">Filter</button>
</form>"#,
        page = state.page(),
        value = escape_html(active.map(|f| f.value.as_str()).unwrap_or("")),
    )
}

fn pager_link(label: &str, enabled: bool, state: &DashboardState, target_page: u32) -> String {
    if enabled {
        format!(
            r#"<a class="button" href="{}">{label}</a>"#,
            escape_html(&page_href(target_page, state.sorting(), state))
        )
    } else {
        format!(r#"<span class="button disabled" aria-disabled="true">{label}</span>"#)
    }
}

/// Link to `page` carrying the given sorting and the state's current filter.
fn page_href(page: u32, sorting: Option<&SortState>, state: &DashboardState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    if let Some(sort) = sorting {
        query.append_pair("sort", &sort.to_string());
    }
    if let Some(filter) = state.filters().first() {
        query.append_pair("filter_by", filter.column.key());
        query.append_pair("filter", &filter.value);
    }
    format!("/?{}", query.finish())
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
