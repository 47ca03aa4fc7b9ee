//! Session token creation with HMAC signing and a fixed TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use shopfront_core::config::AuthConfig;
use shopfront_core::error::AppError;
use shopfront_core::result::AppResult;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Lifetime applied by [`JwtEncoder::issue_session`].
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly minted token and the instant it stops being valid.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Encoded, signed token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when `token_ttl_hours` does not fit a `chrono::Duration`.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Session lifetime of {} hours is out of range",
                    config.token_ttl_hours
                ))
            })?;

        Ok(Self::from_secret(config.jwt_secret.as_bytes(), ttl))
    }

    /// Creates an encoder from a raw secret and session lifetime.
    pub fn from_secret(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issues a session token for `subject` with the configured lifetime.
    pub fn issue_session(&self, subject: Uuid) -> AppResult<IssuedToken> {
        self.issue(subject, self.ttl)
    }

    /// Issues a token for `subject` valid for `ttl` from now.
    pub fn issue(&self, subject: Uuid, ttl: Duration) -> AppResult<IssuedToken> {
        self.issue_at(subject, Utc::now(), ttl)
    }

    /// Issues a token as if minted at `issued_at`.
    pub fn issue_at(
        &self,
        subject: Uuid,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> AppResult<IssuedToken> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Session token expiry is out of range"))?;

        let claims = Claims {
            sub: subject,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
