//! Error types for the Book Lists server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    Duplicate = 8,
    BadValue = 18,
    NoSuchData = 20,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Turn a UNIQUE constraint violation into a `Conflict`, pass anything else through.
    pub fn on_unique_violation(err: sqlx::Error, message: impl Into<String>) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(message.into())
            }
            _ => AppError::Database(err),
        }
    }

    /// Turn a FOREIGN KEY violation into a `NotFound`, pass anything else through.
    pub fn on_foreign_key_violation(err: sqlx::Error, message: impl Into<String>) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(message.into())
            }
            _ => AppError::Database(err),
        }
    }

    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            // Duplicate names are a client input problem, reported like validation
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, ErrorCode::Duplicate, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            detail,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
