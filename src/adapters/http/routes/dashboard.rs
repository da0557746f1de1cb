use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;

use crate::adapters::{
    dashboard::{
        Command, DashboardState, FetchState, render,
        table::{Column, SortState},
    },
    http::app_state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard_page))
}

/// Query parameters are lenient: anything unparseable falls back to its default so a bad
/// link still shows the dashboard.
#[derive(Deserialize, Default)]
struct DashboardQuery {
    page: Option<String>,
    sort: Option<String>,
    filter: Option<String>,
    filter_by: Option<String>,
}

impl DashboardQuery {
    fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(0)
    }

    fn sorting(&self) -> Option<SortState> {
        self.sort.as_deref().and_then(|s| s.parse().ok())
    }

    fn filter(&self) -> Option<(Column, String)> {
        let value = self.filter.as_deref()?.trim();
        if value.is_empty() {
            return None;
        }
        let column = match self.filter_by.as_deref() {
            Some(key) => key.parse().ok()?,
            None => Column::Email,
        };
        Some((column, value.to_string()))
    }
}

/// GET /
/// Server-rendered dashboard for one page of the waitlist.
async fn dashboard_page(
    State(app_state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let mut state = DashboardState::at_page(query.page());
    state.dispatch(Command::SetSorting(query.sorting()));
    if let Some((column, value)) = query.filter() {
        state.dispatch(Command::SetFilter { column, value });
    }

    app_state.dashboard.handle(&mut state, Command::Refresh).await;

    let status = match state.list() {
        FetchState::Failed(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    (status, Html(render(&state, &app_state.render_options())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use chrono::FixedOffset;

    use crate::test_utils::{TestAppStateBuilder, create_test_entries, create_test_entry};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    fn server_with(count: usize) -> TestServer {
        let app_state = TestAppStateBuilder::new()
            .with_entries(create_test_entries(count))
            .build();
        TestServer::new(build_test_router(app_state)).unwrap()
    }

    #[tokio::test]
    async fn first_page_renders_rows_and_totals() {
        let server = server_with(150);

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1>Waitlist Dashboard</h1>"));
        assert!(html.contains(r#"<div class="total">150</div>"#));
        assert!(html.contains(
            "Showing <strong>1</strong> to <strong>100</strong> of <strong>150</strong> entries"
        ));
        // Newest entry first
        assert!(html.contains("<td>user150@example.com</td>"));
        assert!(!html.contains("<td>user50@example.com</td>"));
        assert!(html.contains(r#"href="/?page=1">Next"#));
    }

    #[tokio::test]
    async fn second_page_is_last() {
        let server = server_with(150);

        let html = server.get("/").add_query_param("page", 1).await.text();

        assert!(html.contains(
            "Showing <strong>101</strong> to <strong>150</strong> of <strong>150</strong> entries"
        ));
        assert!(html.contains("<td>user1@example.com</td>"));
        assert!(html.contains(r#"<span class="button disabled" aria-disabled="true">Next</span>"#));
    }

    #[tokio::test]
    async fn empty_storage_renders_no_entries() {
        let server = server_with(0);

        let html = server.get("/").await.text();

        assert!(html.contains("No entries found."));
    }

    #[tokio::test]
    async fn missing_name_renders_na() {
        let entry = create_test_entry(|e| e.name = None);
        let app_state = TestAppStateBuilder::new().with_entries(vec![entry]).build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let html = server.get("/").await.text();

        assert!(html.contains(">N/A<"));
        assert!(!html.contains(">null<"));
    }

    #[tokio::test]
    async fn created_at_uses_configured_offset() {
        let entry = create_test_entry(|_| {});
        let app_state = TestAppStateBuilder::new()
            .with_entries(vec![entry])
            .with_display_offset(FixedOffset::east_opt(9 * 3600).unwrap())
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let html = server.get("/").await.text();

        assert!(html.contains("<td>2025-01-15 21:00:00</td>"));
    }

    #[tokio::test]
    async fn sort_and_filter_apply_to_fetched_page() {
        let server = server_with(12);

        let html = server
            .get("/")
            .add_query_param("sort", "id:asc")
            .add_query_param("filter_by", "email")
            .add_query_param("filter", "USER1")
            .await
            .text();

        let first = html.find("<td>user1@example.com</td>").unwrap();
        let tenth = html.find("<td>user10@example.com</td>").unwrap();
        assert!(first < tenth);
        assert!(!html.contains("<td>user2@example.com</td>"));
    }

    #[tokio::test]
    async fn bad_params_fall_back_to_defaults() {
        let server = server_with(3);

        let response = server
            .get("/")
            .add_query_param("page", "-4")
            .add_query_param("sort", "sideways")
            .add_query_param("filter_by", "nope")
            .add_query_param("filter", "x")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Page <strong>1</strong>"));
        assert!(html.contains("<td>user3@example.com</td>"));
    }

    #[tokio::test]
    async fn storage_failure_renders_failure_panel() {
        let app_state = TestAppStateBuilder::new().with_failing_storage().build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.text().contains("Failed to load waitlist entries."));
    }
}
