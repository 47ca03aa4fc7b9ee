//! Session token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use shopfront_core::config::AuthConfig;
use shopfront_core::error::AppError;

use super::claims::Claims;

/// Why a token failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a structurally valid JWT (segments, base64, or JSON).
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the server secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The `exp` claim lies in the past.
    #[error("token has expired")]
    Expired,
    /// Any other validation failure (wrong algorithm, missing claim).
    #[error("token rejected: {0}")]
    Rejected(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => Self::Expired,
            JwtErrorKind::InvalidSignature => Self::InvalidSignature,
            JwtErrorKind::InvalidToken
            | JwtErrorKind::Base64(_)
            | JwtErrorKind::Json(_)
            | JwtErrorKind::Utf8(_) => Self::Malformed,
            _ => Self::Rejected(err.to_string()),
        }
    }
}

/// All token failures look the same to clients.
impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        tracing::debug!(reason = %err, "Session token rejected");
        AppError::authentication("Invalid or expired token")
    }
}

/// Validates HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Creates a decoder from a raw secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decodes a token, checking signature and expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
