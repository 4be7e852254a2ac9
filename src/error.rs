//! Unified error types for the product store.

use thiserror::Error;

/// Failures surfaced by the product repository.
///
/// Handlers map each kind onto a distinct HTTP status; nothing falls through
/// to an undifferentiated 500.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No product exists for the given identifier.
    #[error("product {0} not found")]
    NotFound(String),

    /// The identifier string is not in the store's accepted format.
    #[error("invalid product id '{0}'")]
    InvalidId(String),

    /// A required field is missing or malformed on a write.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store could not be reached or could not perform the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // 23502 = not_null_violation, 23514 = check_violation
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some("23502") | Some("23514") => StoreError::Validation(db.message().to_string()),
                _ => StoreError::Unavailable(err.to_string()),
            },
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}
