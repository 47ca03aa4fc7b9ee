//! Product handlers.

use axum::Json;
use axum::extract::State;

use shopfront_entity::product::{Product, ProductWithOwner};

use crate::dto::request::CreateProductRequest;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .product_service
        .create(&req.title, req.price, req.owner_id)
        .await?;

    Ok(Json(product))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithOwner>>, ApiError> {
    Ok(Json(state.product_service.list().await?))
}
