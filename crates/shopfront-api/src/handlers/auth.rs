//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;

use shopfront_entity::user::PublicUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state
        .auth_service
        .register(&req.email, &req.password)
        .await?;

    Ok(Json(user))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state.auth_service.current_user(auth.context()).await?;
    Ok(Json(user))
}
