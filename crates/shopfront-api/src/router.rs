//! Route definitions for the Shopfront HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Product catalogue
fn product_routes() -> Router<AppState> {
    Router::new().route(
        "/products",
        get(handlers::product::list_products).post(handlers::product::create_product),
    )
}

/// Liveness and store status
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
