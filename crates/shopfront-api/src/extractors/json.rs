//! `ValidatedJson` extractor: JSON body binding followed by `validator` checks.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use shopfront_core::error::AppError;

use crate::error::ApiError;

/// JSON body that has been deserialized and validated.
///
/// Malformed JSON, a wrong content type, missing fields, and failed
/// validation rules are all rejected as `Validation` errors.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|errors| {
            tracing::debug!(%errors, "Request body failed validation");
            AppError::validation("Invalid request body")
        })?;

        Ok(Self(value))
    }
}
