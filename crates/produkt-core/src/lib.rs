//! # produkt-core: Pure Domain Model for the Produkt API
//!
//! This crate holds the catalog's domain types and rules with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Produkt Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Storefront + HTTP layer (external)                 │   │
//! │  │    category menu ──► product grid ──► CRUD endpoints            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 produkt-service (ProductService)                │   │
//! │  │    duplicate titles, not-found mapping                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ produkt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │  catalog  │                  │   │
//! │  │   │  Product  │  │   rules   │  │  fixture  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  produkt-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` entity
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//! - [`catalog`] - The storefront's seeded catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use produkt_core::Product;
//! use produkt_core::validation::validate_product;
//!
//! let product = Product::new(
//!     "Computor",
//!     35.0,
//!     "electronics",
//!     "Description of item",
//!     "https://example.com/computor.jpg",
//! );
//!
//! assert!(product.id.is_none());
//! assert!(validate_product(&product).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;
