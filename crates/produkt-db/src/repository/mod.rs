//! # Repository Module
//!
//! The persistence contract for products and its SQLite implementation.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ProductService<R: ProductRepository>                                  │
//! │       │                                                                 │
//! │       │  repo.find_by_title("En dator")                                │
//! │       ▼                                                                 │
//! │  ProductRepository (trait)                                             │
//! │  ├── find_all / find_by_id                                             │
//! │  ├── find_by_title / find_by_category / find_all_categories            │
//! │  └── save / delete_by_id                                               │
//! │       │                                                                 │
//! │       ├──► SqliteProductRepository   (production)                      │
//! │       └──► MockProductRepository     (tests, `mock` feature)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository adds no guarantees of its own beyond what SQLite provides,
//! except that inserting a new product is a conditional write on its title.

use async_trait::async_trait;
use produkt_core::{Product, ProductId};

use crate::error::DbResult;

pub mod product;

/// Data access for [`Product`] records.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in id order.
    async fn find_all(&self) -> DbResult<Vec<Product>>;

    /// The product with this id, if any.
    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<Product>>;

    /// The product with exactly this title (case-sensitive), if any.
    async fn find_by_title(&self, title: &str) -> DbResult<Option<Product>>;

    /// Products whose category equals `category` exactly (case-sensitive).
    async fn find_by_category(&self, category: &str) -> DbResult<Vec<Product>>;

    /// Distinct category values, each once, ascending.
    async fn find_all_categories(&self) -> DbResult<Vec<String>>;

    /// Persists a product and returns the stored record.
    ///
    /// - `id == None`: inserts and assigns an id. Fails with
    ///   `DbError::UniqueViolation { field: "title", .. }` when the title is
    ///   already stored.
    /// - `id == Some(_)`: overwrites the row with that id, or inserts it with
    ///   that id when absent. Titles are not checked.
    async fn save(&self, product: Product) -> DbResult<Product>;

    /// Removes the product with this id. Fails with `DbError::NotFound` when
    /// there is no such row.
    async fn delete_by_id(&self, id: ProductId) -> DbResult<()>;
}
