//! # Storefront Catalog
//!
//! The 20 products the storefront ships with, embedded at compile time from
//! `data/catalog.json`. The seed binary loads them through the service; the
//! browser acceptance suite asserts the same titles, prices and images.
//!
//! ```text
//! ┌──────────────────────┬───────┐
//! │ category             │ count │
//! ├──────────────────────┼───────┤
//! │ electronics          │   6   │
//! │ jewelery             │   4   │
//! │ men's clothing       │   4   │
//! │ women's clothing     │   6   │
//! └──────────────────────┴───────┘
//! ```

use std::collections::BTreeMap;

use crate::types::Product;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Parses the embedded catalog, in storefront display order.
///
/// Products come back unsaved (`id == None`).
pub fn storefront_catalog() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(CATALOG_JSON)
}

/// Counts products per category, keyed in ascending category order.
pub fn count_by_category(products: &[Product]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.clone()).or_insert(0) += 1;
    }
    counts
}
