//! Store traits consumed by the service layer.
//!
//! Both traits are object safe so services can hold `Arc<dyn UserStore>`
//! and swap PostgreSQL for the in-memory store without code changes.

use async_trait::async_trait;
use uuid::Uuid;

use shopfront_core::result::AppResult;
use shopfront_entity::product::{CreateProduct, Product, ProductWithOwner};
use shopfront_entity::user::{CreateUser, User};

/// Persistence contract for user records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a user and return the stored row.
    ///
    /// A duplicate email is reported as a `Conflict` error.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Find the user with exactly this email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Persistence contract for product records.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// Insert a product and return the stored row.
    async fn create(&self, data: &CreateProduct) -> AppResult<Product>;

    /// All products joined with their owner, oldest first.
    async fn list_with_owner(&self) -> AppResult<Vec<ProductWithOwner>>;
}
