use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::transport::http::types::{AppState, Message};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = String)
    )
)]
pub async fn index_handler() -> &'static str {
    "Hello from the Product API"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store reachable)", body = Message),
        (status = 503, description = "Service is unhealthy (store unreachable)", body = Message)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Message {
                message: "ok".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Message {
                message: format!("store ping failed: {}", e),
            }),
        )
            .into_response(),
    }
}
