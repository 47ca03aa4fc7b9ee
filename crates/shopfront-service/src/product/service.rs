//! Product creation and listing.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use shopfront_core::error::AppError;
use shopfront_core::result::AppResult;
use shopfront_database::store::ProductStore;
use shopfront_entity::product::{CreateProduct, Product, ProductWithOwner};

/// Manages the product catalogue.
pub struct ProductService {
    /// Product store.
    products: Arc<dyn ProductStore>,
}

impl std::fmt::Debug for ProductService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductService").finish_non_exhaustive()
    }
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Stores a product as given.
    ///
    /// `owner_id` is taken from the caller and is not checked against the
    /// user table.
    pub async fn create(&self, title: &str, price: f64, owner_id: Uuid) -> AppResult<Product> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("title is required"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("price must be a non-negative number"));
        }

        let data = CreateProduct {
            title: title.to_string(),
            price,
            owner_id,
        };

        let product = self.products.create(&data).await.map_err(|e| {
            error!(error = %e, "Failed to persist product");
            AppError::conflict("Could not create product")
        })?;

        info!(product_id = %product.id, owner_id = %product.owner_id, "Product created");

        Ok(product)
    }

    /// Lists every product with its owner attached.
    pub async fn list(&self) -> AppResult<Vec<ProductWithOwner>> {
        self.products.list_with_owner().await
    }
}
