//! # Validation Module
//!
//! Field rules for [`Product`] that hold regardless of storage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (no I/O)                                         │
//! │  ├── title present and not too long                                    │
//! │  └── price finite and not negative                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductService                                               │
//! │  └── title not already taken (repository lookup)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── conditional insert on title                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use produkt_core::validation::{validate_price, validate_title};
//!
//! validate_title("Mens Cotton Jacket").unwrap();
//! validate_price(55.99).unwrap();
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;
use crate::MAX_TITLE_LENGTH;

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most [`MAX_TITLE_LENGTH`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// Zero is allowed (free items); NaN and infinities are not.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates every constrained field of a product.
///
/// Category, description and image URL are free text and not checked.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_title(&product.title)?;
    validate_price(product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
