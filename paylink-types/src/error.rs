//! Error types for the payment link service.
//!
//! "Not found" is never an error in the service core - lookups return
//! `Option` and deletes return a bool. These types cover genuine storage
//! failures and their HTTP-boundary mapping.

/// Repository-level errors (data access failures).
///
/// The service layer propagates these unhandled - no retry, no
/// translation, no logging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Only the inbound adapter constructs
/// these; the service core stays on `RepoError`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}
