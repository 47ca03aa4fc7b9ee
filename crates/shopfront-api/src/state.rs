//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use shopfront_auth::jwt::{JwtDecoder, JwtEncoder};
use shopfront_auth::password::PasswordHasher;
use shopfront_core::config::AppConfig;
use shopfront_core::result::AppResult;
use shopfront_database::provider::StoreManager;
use shopfront_service::auth::AuthService;
use shopfront_service::product::ProductService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Store backend (PostgreSQL or in-memory)
    pub stores: Arc<StoreManager>,
    /// Registration, login, and token resolution
    pub auth_service: Arc<AuthService>,
    /// Product creation and listing
    pub product_service: Arc<ProductService>,
}

impl AppState {
    /// Wires the credential primitives and services over `stores`.
    ///
    /// Fails when the configured hashing parameters or token lifetime are invalid.
    pub fn new(config: AppConfig, stores: StoreManager) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::from_config(&config.auth)?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            stores.users(),
            hasher,
            encoder,
            decoder,
        )?);
        let product_service = Arc::new(ProductService::new(stores.products()));

        Ok(Self {
            config: Arc::new(config),
            stores: Arc::new(stores),
            auth_service,
            product_service,
        })
    }
}
