use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::pagination::PageRequest,
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries))
        .route("/count", get(count_entries))
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<i64>,
    limit: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    entries: Vec<WaitlistEntry>,
    total: i64,
    has_more: bool,
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

/// GET /api/waitlist?page=&limit=
/// One page of entries, newest first, with the total and whether more pages exist.
async fn list_entries(
    State(app_state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    // Validate before touching storage
    let request = PageRequest::new(query.page, query.limit)?;

    let page = app_state.waitlist_use_cases.list(request).await?;

    Ok(Json(ListResponse {
        entries: page.entries,
        total: page.total,
        has_more: page.has_more,
    }))
}

/// GET /api/waitlist/count
async fn count_entries(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.waitlist_use_cases.count().await?;
    Ok(Json(CountResponse { count }))
}
