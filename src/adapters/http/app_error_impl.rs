use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let code = self.code();
        match self {
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, code, Some(msg)),
            AppError::StorageUnavailable(_) => {
                error_resp(StatusCode::SERVICE_UNAVAILABLE, code, None)
            }
            AppError::Unknown(_) => error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, None),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
