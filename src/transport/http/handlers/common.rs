use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use crate::error::StoreError;
use crate::transport::http::types::Message;

/// Maps a repository failure onto its HTTP status and `{message}` body.
pub fn error_response(err: StoreError) -> (StatusCode, Json<Message>) {
    let status = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidId(_) | StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (
        status,
        Json(Message {
            message: err.to_string(),
        }),
    )
}

/// A missing or mistyped body field is a validation failure, not a framework
/// rejection passed through raw.
pub fn rejection_response(err: JsonRejection) -> (StatusCode, Json<Message>) {
    error_response(StoreError::Validation(err.body_text()))
}
