//! Product repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shopfront_core::error::{AppError, ErrorKind};
use shopfront_core::result::AppResult;
use shopfront_entity::product::{CreateProduct, OwnerSummary, Product, ProductWithOwner};

use crate::store::ProductStore;

/// PostgreSQL-backed product store.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

/// Flat row produced by the product/owner join.
#[derive(Debug, FromRow)]
struct ProductOwnerRow {
    id: Uuid,
    title: String,
    price: f64,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    owner_email: Option<String>,
}

impl From<ProductOwnerRow> for ProductWithOwner {
    fn from(row: ProductOwnerRow) -> Self {
        let owner = row.owner_email.map(|email| OwnerSummary {
            id: row.owner_id,
            email,
        });

        Self {
            product: Product {
                id: row.id,
                title: row.title,
                price: row.price,
                owner_id: row.owner_id,
                created_at: row.created_at,
            },
            owner,
        }
    }
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (title, price, owner_id) VALUES ($1, $2, $3) \
             RETURNING id, title, price, owner_id, created_at",
        )
        .bind(&data.title)
        .bind(data.price)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    async fn list_with_owner(&self) -> AppResult<Vec<ProductWithOwner>> {
        let rows = sqlx::query_as::<_, ProductOwnerRow>(
            "SELECT p.id, p.title, p.price, p.owner_id, p.created_at, u.email AS owner_email \
             FROM products p \
             LEFT JOIN users u ON u.id = p.owner_id \
             ORDER BY p.created_at ASC, p.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))?;

        Ok(rows.into_iter().map(ProductWithOwner::from).collect())
    }
}
