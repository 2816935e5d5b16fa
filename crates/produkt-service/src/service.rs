//! # Product Service
//!
//! Business rules over a [`ProductRepository`].
//!
//! ## Operations
//! ```text
//! ┌──────────────────────────┬──────────────────────────────┬──────────────┐
//! │ operation                │ repository calls             │ failure      │
//! ├──────────────────────────┼──────────────────────────────┼──────────────┤
//! │ get_all_products         │ find_all                     │ -            │
//! │ get_all_categories       │ find_all_categories          │ -            │
//! │ get_products_by_category │ find_by_category             │ -            │
//! │ get_product_by_id        │ find_by_id                   │ NotFound     │
//! │ add_product              │ find_by_title, save          │ BadRequest   │
//! │ update_product           │ find_by_id, save             │ NotFound     │
//! │ delete_product           │ find_by_id, delete_by_id     │ NotFound     │
//! └──────────────────────────┴──────────────────────────────┴──────────────┘
//! ```
//!
//! Each operation issues exactly the calls listed, in that order, and stops at
//! the first failure. Field validation runs before any call, except in
//! `update_product` where the id is resolved first.

use tracing::{debug, info, warn};

use produkt_core::validation::validate_product;
use produkt_core::{Product, ProductId};
use produkt_db::ProductRepository;

use crate::error::{ServiceError, ServiceResult};

/// Catalog operations consumed by the HTTP layer.
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repository: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service over the given repository.
    pub fn new(repository: R) -> Self {
        ProductService { repository }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Every product in the catalog.
    pub async fn get_all_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.repository.find_all().await?)
    }

    /// Every distinct category, each once.
    pub async fn get_all_categories(&self) -> ServiceResult<Vec<String>> {
        Ok(self.repository.find_all_categories().await?)
    }

    /// Products whose category equals `category` exactly.
    pub async fn get_products_by_category(&self, category: &str) -> ServiceResult<Vec<Product>> {
        Ok(self.repository.find_by_category(category).await?)
    }

    /// The product with this id.
    ///
    /// ## Errors
    /// * `ServiceError::NotFound` - no product has this id
    pub async fn get_product_by_id(&self, id: ProductId) -> ServiceResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Creates a product and returns the stored record (with its new id).
    ///
    /// Any id on the incoming product is ignored; the store assigns one.
    ///
    /// ## Errors
    /// * `ServiceError::BadRequest` - invalid fields, or the title is taken
    pub async fn add_product(&self, mut product: Product) -> ServiceResult<Product> {
        validate_product(&product)?;

        if self.repository.find_by_title(&product.title).await?.is_some() {
            warn!(title = %product.title, "Rejected product with duplicate title");
            return Err(ServiceError::duplicate_title(&product.title));
        }

        if product.id.take().is_some() {
            debug!(title = %product.title, "Ignoring id on new product");
        }

        let title = product.title.clone();
        let saved = self.repository.save(product).await.map_err(|err| {
            // Lost a race with a concurrent insert of the same title
            if err.is_duplicate_of("title") {
                warn!(title = %title, "Title taken during insert");
                ServiceError::duplicate_title(&title)
            } else {
                ServiceError::Repository(err)
            }
        })?;

        info!(id = ?saved.id, title = %saved.title, "Product added");
        Ok(saved)
    }

    /// Replaces every field of product `id` with `product`'s fields.
    ///
    /// The stored record takes `id` whatever id `product` carried. Fields are
    /// not merged and the title is not checked against other products.
    ///
    /// ## Errors
    /// * `ServiceError::NotFound` - no product has this id, checked first
    /// * `ServiceError::BadRequest` - invalid fields
    pub async fn update_product(&self, product: Product, id: ProductId) -> ServiceResult<Product> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!(id = %id, "Update of missing product");
            return Err(ServiceError::NotFound { id });
        }

        validate_product(&product)?;

        let saved = self.repository.save(product.with_id(id)).await?;

        info!(id = %id, "Product updated");
        Ok(saved)
    }

    /// Removes product `id`.
    ///
    /// ## Errors
    /// * `ServiceError::NotFound` - no product has this id
    pub async fn delete_product(&self, id: ProductId) -> ServiceResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!(id = %id, "Delete of missing product");
            return Err(ServiceError::NotFound { id });
        }

        self.repository.delete_by_id(id).await?;

        info!(id = %id, "Product deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
//
// MockProductRepository panics on any call without a matching expectation and
// verifies `times(..)` on drop, so each test pins the full interaction.

#[cfg(test)]
mod tests {
    use super::*;
    use produkt_db::{DbError, MockProductRepository};

    fn computor(price: f64) -> Product {
        Product::new(
            "Computor",
            price,
            "Electronics",
            "Description of item",
            "URL",
        )
    }

    #[tokio::test]
    async fn test_get_all_products_calls_find_all_once() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![computor(35.0).with_id(1)]));

        let service = ProductService::new(repo);
        let products = service.get_all_products().await.unwrap();

        assert_eq!(products, vec![computor(35.0).with_id(1)]);
    }

    #[tokio::test]
    async fn test_get_all_categories_calls_find_all_categories_once() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all_categories()
            .times(1)
            .returning(|| Ok(vec!["electronics".to_string(), "jewelery".to_string()]));

        let service = ProductService::new(repo);
        let categories = service.get_all_categories().await.unwrap();

        assert_eq!(categories, vec!["electronics", "jewelery"]);
    }

    #[tokio::test]
    async fn test_get_products_by_category_calls_find_by_category_once() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_category()
            .withf(|category| category == "test")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = ProductService::new(repo);
        let products = service.get_products_by_category("test").await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_by_id_returns_found_product() {
        let product = computor(35.0).with_id(3);
        let returned = product.clone();

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(repo);

        assert_eq!(service.get_product_by_id(3).await.unwrap(), product);
    }

    #[tokio::test]
    async fn test_get_product_by_id_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product_by_id(99).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { id: 99 }));
        assert_eq!(err.to_string(), "product with id 99 not found");
    }

    #[tokio::test]
    async fn test_add_product_checks_title_then_saves_once() {
        let expected = computor(35.0);

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_title()
            .withf(|title| title == "Computor")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(move |product| *product == expected)
            .times(1)
            .returning(|product| Ok(product.with_id(1)));

        let service = ProductService::new(repo);
        let saved = service.add_product(computor(35.0)).await.unwrap();

        assert_eq!(saved, computor(35.0).with_id(1));
        assert_ne!(saved, computor(36.0).with_id(1));
    }

    #[tokio::test]
    async fn test_add_product_ignores_incoming_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_title().times(1).returning(|_| Ok(None));
        repo.expect_save()
            .withf(|product| product.id.is_none())
            .times(1)
            .returning(|product| Ok(product.with_id(5)));

        let service = ProductService::new(repo);
        let saved = service.add_product(computor(35.0).with_id(77)).await.unwrap();

        assert_eq!(saved.id, Some(5));
    }

    #[tokio::test]
    async fn test_add_product_with_duplicate_title_is_bad_request() {
        let existing = computor(35.0).with_id(1);

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_title()
            .withf(|title| title == "Computor")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save().never();

        let service = ProductService::new(repo);
        let err = service.add_product(computor(35.0)).await.unwrap_err();

        assert!(matches!(err, ServiceError::BadRequest(_)));
        assert_eq!(
            err.to_string(),
            "a product with the title: Computor already exists"
        );
    }

    #[tokio::test]
    async fn test_add_product_translates_store_conflict() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_title().times(1).returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|product| Err(DbError::duplicate("title", product.title)));

        let service = ProductService::new(repo);
        let err = service.add_product(computor(35.0)).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "a product with the title: Computor already exists"
        );
    }

    #[tokio::test]
    async fn test_add_product_propagates_other_store_faults() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_title().times(1).returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(DbError::PoolExhausted));

        let service = ProductService::new(repo);
        let err = service.add_product(computor(35.0)).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repository(DbError::PoolExhausted)));
    }

    #[tokio::test]
    async fn test_add_invalid_product_touches_no_repository() {
        // No expectations: any repository call would panic
        let service = ProductService::new(MockProductRepository::new());

        let blank = Product::new("", 35.0, "Electronics", "", "");
        let err = service.add_product(blank).await.unwrap_err();
        assert_eq!(err.to_string(), "title is required");

        let negative = computor(-1.0);
        assert!(matches!(
            service.add_product(negative).await,
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_update_existing_product_saves_new_product_once() {
        let expected = computor(35.0).with_id(4);

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|id| Ok(Some(computor(33.0).with_id(id))));
        repo.expect_save()
            .withf(move |product| *product == expected)
            .times(1)
            .returning(Ok);
        // Update never checks titles
        repo.expect_find_by_title().never();

        let service = ProductService::new(repo);
        let updated = service.update_product(computor(35.0), 4).await.unwrap();

        assert_eq!(updated, computor(35.0).with_id(4));
    }

    #[tokio::test]
    async fn test_update_adopts_target_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(computor(33.0).with_id(id))));
        repo.expect_save()
            .withf(|product| product.id == Some(4))
            .times(1)
            .returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_product(computor(35.0).with_id(999), 4)
            .await
            .unwrap();

        assert_eq!(updated.id, Some(4));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found_without_save() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_save().never();

        let service = ProductService::new(repo);
        let err = service.update_product(computor(35.0), 8).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { id: 8 }));
    }

    #[tokio::test]
    async fn test_update_missing_product_with_invalid_fields_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_save().never();

        let service = ProductService::new(repo);
        let blank = Product::new("", 1.0, "c", "", "");
        let err = service.update_product(blank, 404).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { id: 404 }));
    }

    #[tokio::test]
    async fn test_update_existing_product_with_invalid_fields_skips_save() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(computor(33.0).with_id(id))));
        repo.expect_save().never();

        let service = ProductService::new(repo);
        let err = service.update_product(computor(-1.0), 4).await.unwrap_err();

        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_existing_product_deletes_once() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|id| Ok(Some(computor(35.0).with_id(id))));
        repo.expect_delete_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductService::new(repo);

        service.delete_product(2).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found_without_delete() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let service = ProductService::new(repo);
        let err = service.delete_product(2).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { id: 2 }));
        assert_eq!(err.to_string(), "product with id 2 not found");
    }

    #[tokio::test]
    async fn test_lookup_fault_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Err(DbError::ConnectionFailed("Pool is closed".to_string())));
        repo.expect_delete_by_id().never();

        let service = ProductService::new(repo);
        let err = service.delete_product(2).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repository(DbError::ConnectionFailed(_))
        ));
    }
}
