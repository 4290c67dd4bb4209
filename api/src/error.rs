//! Unified error types for the Warbot feed API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core rendering and log store errors
//! - `ParseError`: Warbot announcement line parsing errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A stored record carries a type code outside 1..=5
    #[error("Invalid announcement type: {0}")]
    InvalidType(i32),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Parse error for warbot announcement lines
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unrecognized announcement: {0}")]
    Unrecognized(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidType(code)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid announcement type",
                Some(code.to_string()),
            ),
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Parse(msg) => (StatusCode::BAD_REQUEST, "Parse error", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}
