//! In-memory store implementation.
//!
//! Mirrors the PostgreSQL schema rules that matter to callers: emails are
//! unique, ids are assigned on insert, and products keep insertion order.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use shopfront_core::error::AppError;
use shopfront_core::result::AppResult;
use shopfront_entity::product::{CreateProduct, OwnerSummary, Product, ProductWithOwner};
use shopfront_entity::user::{CreateUser, User};

use crate::store::{ProductStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    products: Vec<Product>,
}

/// Store keeping users and products in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already exists"));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        let mut tables = self.tables.write().await;

        let product = Product {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            price: data.price,
            owner_id: data.owner_id,
            created_at: Utc::now(),
        };
        tables.products.push(product.clone());

        Ok(product)
    }

    async fn list_with_owner(&self) -> AppResult<Vec<ProductWithOwner>> {
        let tables = self.tables.read().await;

        let rows = tables
            .products
            .iter()
            .map(|product| {
                let owner = tables
                    .users
                    .iter()
                    .find(|u| u.id == product.owner_id)
                    .map(|u| OwnerSummary {
                        id: u.id,
                        email: u.email.clone(),
                    });

                ProductWithOwner {
                    product: product.clone(),
                    owner,
                }
            })
            .collect();

        Ok(rows)
    }
}
