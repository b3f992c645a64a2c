use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Fallback for routes that do not exist.
pub async fn not_found() -> Response {
    tracing::debug!("Route not found");
    let body = Json(ErrorResponse::new(messages::ROUTE_NOT_FOUND));

    (StatusCode::NOT_FOUND, body).into_response()
}
