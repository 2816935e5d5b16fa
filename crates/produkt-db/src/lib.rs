//! # produkt-db: Database Layer for the Produkt API
//!
//! This crate provides database access for the product catalog.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Produkt Data Flow                                │
//! │                                                                         │
//! │  ProductService (add_product, get_products_by_category, ...)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    produkt-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │ ProductRepository  │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │  (trait)           │  │ (embedded) │  │   │
//! │  │   │               │    │       ▲            │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ SqliteProduct-     │  │ 001_create │  │   │
//! │  │   │               │    │ Repository         │  │ _products  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (PRODUKT_DATABASE_PATH)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The repository contract and its SQLite implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use produkt_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::new("./produkt.db")).await?;
//!
//! let electronics = db.products().find_by_category("electronics").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::SqliteProductRepository;
pub use repository::ProductRepository;

#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
