pub mod dashboard;
pub mod waitlist;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::adapters::http::app_state::AppState;

/// JSON API, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().nest("/waitlist", waitlist::router())
}

/// HTML dashboard and liveness probe, mounted at the root.
pub fn page_router() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
