use thiserror::Error;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints convert to `ApiError`, which hides
/// storage diagnostics behind an opaque 500.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("database error during {operation}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("token encoding failed: {0}")]
    Token(String),

    #[error("stored role value is invalid: {0}")]
    InvalidStoredRole(String),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database {
            operation: operation.to_string(),
            source,
        }
    }
}
