//! Store selection based on configuration.

use std::sync::Arc;

use tracing::info;

use shopfront_core::config::{DatabaseConfig, StoreProvider};
use shopfront_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{ProductRepository, UserRepository};
use crate::store::{ProductStore, UserStore};

/// Owns the active store backend and hands out trait-object handles to it.
#[derive(Clone)]
pub struct StoreManager {
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    /// Present only for the PostgreSQL backend.
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreManager")
            .field("provider", &self.provider())
            .finish()
    }
}

impl StoreManager {
    /// Connect to the configured backend, running migrations if enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }

    /// Build a manager over an existing PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            products: Arc::new(ProductRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Build a manager over a fresh in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: Arc::clone(&store) as Arc<dyn UserStore>,
            products: store as Arc<dyn ProductStore>,
            pool: None,
        }
    }

    /// Which backend is active.
    pub fn provider(&self) -> StoreProvider {
        if self.pool.is_some() {
            StoreProvider::Postgres
        } else {
            StoreProvider::Memory
        }
    }

    /// Handle to the user store.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// Handle to the product store.
    pub fn products(&self) -> Arc<dyn ProductStore> {
        Arc::clone(&self.products)
    }

    /// Check store connectivity. The in-memory store is always healthy.
    pub async fn health_check(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.ping().await,
            None => true,
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
