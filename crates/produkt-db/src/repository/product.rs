//! # Product Repository
//!
//! SQLite implementation of [`ProductRepository`].
//!
//! ## Saving
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How save() Picks a Statement                         │
//! │                                                                         │
//! │  product.id == None                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT … SELECT … WHERE NOT EXISTS (same title) RETURNING id          │
//! │       │                                                                 │
//! │       ├── row returned → product.with_id(id)                           │
//! │       └── no row       → DbError::UniqueViolation { field: "title" }   │
//! │                                                                         │
//! │  product.id == Some(id)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT … ON CONFLICT(id) DO UPDATE   (overwrite, no title check)      │
//! │                                                                         │
//! │  SQLite runs one writer at a time, so the existence test and the       │
//! │  insert cannot interleave with another insert.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::ProductRepository;
use crate::error::{DbError, DbResult};
use produkt_core::{Product, ProductId};

/// SQLite-backed product repository.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteProductRepository::new(pool);
///
/// let saved = repo.save(Product::new("En dator", 25000.0, "electronics", "", "")).await?;
/// let found = repo.find_by_title("En dator").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Creates a new SqliteProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductRepository { pool }
    }

    /// Inserts a product that has no id yet, unless its title is taken.
    async fn insert_new(&self, product: Product) -> DbResult<Product> {
        debug!(title = %product.title, "Inserting product");

        let id: Option<ProductId> = sqlx::query_scalar(
            r#"
            INSERT INTO products (title, price, category, description, image_url)
            SELECT ?1, ?2, ?3, ?4, ?5
            WHERE NOT EXISTS (SELECT 1 FROM products WHERE title = ?1)
            RETURNING id
            "#,
        )
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.description)
        .bind(&product.image_url)
        .fetch_optional(&self.pool)
        .await?;

        match id {
            Some(id) => Ok(product.with_id(id)),
            None => Err(DbError::duplicate("title", product.title)),
        }
    }

    /// Writes a product under its own id, replacing every other column.
    async fn upsert(&self, id: ProductId, product: Product) -> DbResult<Product> {
        debug!(id = %id, "Upserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, title, price, category, description, image_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                price = excluded.price,
                category = excluded.category,
                description = excluded.description,
                image_url = excluded.image_url
            "#,
        )
        .bind(id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.description)
        .bind(&product.image_url)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Removes every product. Returns how many rows were deleted.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all products");

        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, category, description, image_url
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        debug!(id = %id, "Finding product by id");

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, category, description, image_url
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_by_title(&self, title: &str) -> DbResult<Option<Product>> {
        debug!(title = %title, "Finding product by title");

        // LIMIT 1: updates may leave two rows sharing a title
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, category, description, image_url
            FROM products
            WHERE title = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price, category, description, image_url
            FROM products
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Category lookup returned products");
        Ok(products)
    }

    async fn find_all_categories(&self) -> DbResult<Vec<String>> {
        let categories: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM products ORDER BY category")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn save(&self, product: Product) -> DbResult<Product> {
        match product.id {
            None => self.insert_new(product).await,
            Some(id) => self.upsert(id, product).await,
        }
    }

    async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
