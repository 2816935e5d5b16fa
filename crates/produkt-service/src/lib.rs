//! # produkt-service
//!
//! The catalog's business rules, consumed by an HTTP layer that lives outside
//! this workspace.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Produkt Service                                 │
//! │                                                                         │
//! │  HTTP layer ──► ProductService<R> ──► R: ProductRepository ──► SQLite   │
//! │      ▲                │                                                 │
//! │      │                ▼                                                 │
//! │      └──────── ServiceError (NotFound / BadRequest / Repository)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use produkt_db::Database;
//! use produkt_service::{ProductService, ServiceConfig};
//!
//! let config = ServiceConfig::load()?;
//! let db = Database::new(config.db_config()).await?;
//! let service = ProductService::new(db.products());
//!
//! let jewelery = service.get_products_by_category("jewelery").await?;
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

// Re-exports
pub use config::{ConfigError, ServiceConfig};
pub use error::{ErrorBody, ErrorCode, ServiceError, ServiceResult};
pub use service::ProductService;
