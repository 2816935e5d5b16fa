//! # Error Types
//!
//! Domain-specific error types for produkt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  produkt-core (this file)                                              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  produkt-db                                                            │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  produkt-service                                                       │
//! │  └── ServiceError     - NotFound / BadRequest seen by the HTTP layer   │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError::BadRequest                      │
//! │        DbError         → ServiceError::Repository (unchanged)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when a product doesn't meet the data model's
/// requirements. They are raised before any repository call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
