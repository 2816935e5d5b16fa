//! # Domain Types
//!
//! The catalog has a single entity, [`Product`].
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Identity                                │
//! │                                                                         │
//! │  Product::new(..)         id = None        (not yet persisted)          │
//! │       │                                                                 │
//! │       ▼  repository.save(product)                                       │
//! │  stored product           id = Some(7)     (assigned by the store)      │
//! │       │                                                                 │
//! │       ▼  service.update_product(product, 7)                             │
//! │  replaced product         id = Some(7)     (identity never changes)     │
//! │                                                                         │
//! │  Business key: `title`, unique at creation time.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Numeric product identifier assigned by the store.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront catalog.
///
/// ## Serialization
/// JSON bodies use camelCase, matching what the storefront reads:
/// ```json
/// {
///   "id": 1,
///   "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
///   "price": 109.95,
///   "category": "men's clothing",
///   "description": "Your perfect pack for everyday use...",
///   "imageUrl": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier. `None` until the product is first saved.
    #[serde(default)]
    pub id: Option<ProductId>,

    /// Display title, unique across the catalog.
    pub title: String,

    /// Unit price. Never negative.
    pub price: f64,

    /// Free-text category label ("electronics", "jewelery", ...).
    pub category: String,

    /// Free-text description.
    pub description: String,

    /// Image URL shown in the product grid. Not validated.
    pub image_url: String,
}

impl Product {
    /// Creates an unsaved product (no id).
    pub fn new(
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Product {
            id: None,
            title: title.into(),
            price,
            category: category.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    /// Returns this product carrying the given id.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the product has been persisted.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
