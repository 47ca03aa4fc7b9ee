//! Shopfront Server: user accounts and a product catalogue over HTTP.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use shopfront_api::state::AppState;
use shopfront_core::config::AppConfig;
use shopfront_core::result::AppResult;
use shopfront_database::provider::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment, then validate it.
fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("SHOPFRONT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting Shopfront v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(provider = ?config.database.provider, "Connecting to store...");
    let stores = StoreManager::connect(&config.database).await?;

    let state = AppState::new(config, stores)?;
    let stores = state.stores.clone();

    let result = shopfront_api::run_server(state).await;

    stores.close().await;
    tracing::info!("Shopfront server shut down gracefully");

    result
}
