// src/application/error_handling.rs
//
// Error Handling for HTTP Commands
//
// ARCHITECTURE:
// - Maps internal errors → short user-facing notices
// - Provides consistent error format for the UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Domain rule violation (422)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// Metadata provider error (502)
    ExternalService,

    /// Connection pool exhausted (503)
    Unavailable,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation => StatusCode::BAD_REQUEST,
            ErrorType::DomainError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorType::Database => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::ExternalService => StatusCode::BAD_GATEWAY,
            ErrorType::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::RecordNotFound(id) => Self::new(
                ErrorType::NotFound,
                "Drama not found",
                Some(id.to_string()),
            ),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::MetadataUnavailable(message) => {
                log::warn!("Metadata provider error: {}", message);
                Self::new(
                    ErrorType::ExternalService,
                    "Metadata provider unavailable",
                    None,
                )
            }

            AppError::StorageWriteFailed(message) => {
                log::error!("Storage write failed: {}", message);
                Self::new(
                    ErrorType::Database,
                    "Could not save changes",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Unavailable, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(ErrorType::Internal, "File system operation failed", None)
            }

            AppError::Config(message) | AppError::Other(message) => {
                log::error!("Internal error: {}", message);
                Self::new(ErrorType::Internal, "Internal error", None)
            }
        }
    }

    /// The single notice shown when adding a drama fails for any reason
    /// outside the caller's control.
    pub fn could_not_add(error: AppError) -> Self {
        match error {
            AppError::Domain(_) => Self::from_app_error(error),
            other => {
                let response = Self::from_app_error(other);
                Self::new(
                    response.error_type,
                    "Could not add drama. Please try again.",
                    None,
                )
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }

    pub fn status_code(&self) -> StatusCode {
        self.error_type.status_code()
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Result type returned by every HTTP command
pub type CommandResult<T> = Result<T, ErrorResponse>;
