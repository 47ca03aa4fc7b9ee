//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted session lifetime: one leap year.
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 366;

/// Password hashing and session token configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Required, no default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token lifetime in hours, at most [`MAX_TOKEN_TTL_HOURS`].
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Argon2 memory cost in KiB. Falls back to the hasher's default.
    #[serde(default)]
    pub hash_memory_kib: Option<u32>,
    /// Argon2 iteration count. Falls back to the hasher's default.
    #[serde(default)]
    pub hash_iterations: Option<u32>,
    /// Argon2 lane count. Falls back to the hasher's default.
    #[serde(default)]
    pub hash_parallelism: Option<u32>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
            hash_memory_kib: None,
            hash_iterations: None,
            hash_parallelism: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .finish()
    }
}

/// Seven days.
fn default_token_ttl() -> u64 {
    24 * 7
}
