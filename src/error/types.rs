//! API error types.
//!
//! One variant per outcome in the error taxonomy, plus 5xx variants for the
//! infrastructure failures that can surface from sqlx, bcrypt, and serde.
//! All errors are handled at the handler boundary and converted to the
//! response envelope; nothing propagates to the client as a raw error.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential, or an unparseable one (401).
    #[error("{0}")]
    Unauthenticated(String),

    /// Valid credential, insufficient privilege or rejected token (403).
    #[error("{0}")]
    Forbidden(String),

    /// No such record (404).
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed request fields (400).
    #[error("{0}")]
    InvalidInput(String),

    /// Uniqueness violation (409).
    #[error("{0}")]
    Conflict(String),

    /// Unexpected persistence failure (500).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure (500).
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Serialization failure (500).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other unexpected system failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Map a unique-index rejection from an insert to `Conflict`, leaving
    /// every other database error as a 500. The unique index is the
    /// authoritative check-and-insert; there is no application pre-check.
    pub fn conflict_on_unique(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(message.to_string())
            }
            _ => Self::Database(err),
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Hash(_) | Self::Serialization(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
