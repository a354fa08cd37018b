//! Error types for Libris server

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request validation failed")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Unique-constraint violations are client errors, not server failures
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let message = match db_err.constraint() {
                    Some("categories_name_key") => "Category name already exists",
                    Some("customers_email_key") => "Email already registered",
                    _ => "Duplicate value violates a unique constraint",
                };
                return AppError::Conflict(message.to_string());
            }
        }
        AppError::Database(err)
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Invalid(errors) => {
                // Field name -> first message, mirroring request binding errors
                let fields: BTreeMap<String, String> = errors
                    .field_errors()
                    .iter()
                    .map(|(field, errs)| {
                        let message = errs
                            .first()
                            .and_then(|e| e.message.as_ref())
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "invalid value".to_string());
                        (field.to_string(), message)
                    })
                    .collect();
                return (StatusCode::BAD_REQUEST, Json(fields)).into_response();
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
