//! # Service Error Type
//!
//! What the HTTP layer receives when a [`ProductService`] call fails.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  ValidationError ──────────────────────► ServiceError::BadRequest      │
//! │  title already stored ─────────────────► ServiceError::BadRequest      │
//! │  DbError::UniqueViolation on title ────► ServiceError::BadRequest      │
//! │  id absent on read/update/delete ──────► ServiceError::NotFound        │
//! │  any other DbError ────────────────────► ServiceError::Repository      │
//! │                                                                         │
//! │  HTTP layer:  code() → ErrorCode → http_status()  (404 / 400 / 500)    │
//! │               ErrorBody::from(&err) → JSON response body               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both domain errors are terminal: the HTTP layer translates them directly,
//! nothing retries.
//!
//! [`ProductService`]: crate::ProductService

use serde::Serialize;
use thiserror::Error;

use produkt_core::{ProductId, ValidationError};
use produkt_db::DbError;

/// Errors returned by [`ProductService`](crate::ProductService) operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No product has the requested id.
    #[error("product with id {id} not found")]
    NotFound { id: ProductId },

    /// The request was rejected: duplicate title or invalid fields.
    #[error("{0}")]
    BadRequest(String),

    /// Persistence fault, propagated unchanged.
    #[error(transparent)]
    Repository(#[from] DbError),
}

impl ServiceError {
    /// The error raised when a title is already in use.
    pub fn duplicate_title(title: &str) -> Self {
        ServiceError::BadRequest(format!("a product with the title: {title} already exists"))
    }

    /// Machine-readable category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::NotFound { .. } => ErrorCode::NotFound,
            ServiceError::BadRequest(_) => ErrorCode::BadRequest,
            ServiceError::Repository(_) => ErrorCode::Internal,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// HTTP Translation
// =============================================================================

/// Error categories the HTTP layer maps to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Request rejected (400)
    BadRequest,

    /// Persistence fault (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status code for this category.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::BadRequest => 400,
            ErrorCode::Internal => 500,
        }
    }
}

/// Serialized error body.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "product with id 7 not found" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        let message = match err {
            ServiceError::Repository(db_err) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %db_err, "Database operation failed");
                "Database operation failed".to_string()
            }
            other => other.to_string(),
        };

        ErrorBody {
            code: err.code(),
            message,
        }
    }
}
