//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use shopfront_core::config::AuthConfig;
use shopfront_core::error::AppError;
use shopfront_core::result::AppResult;

/// Default Argon2 memory cost in KiB (19 MiB).
pub const DEFAULT_MEMORY_COST_KIB: u32 = 19_456;

/// Default Argon2 iteration count.
pub const DEFAULT_TIME_COST: u32 = 2;

/// Default Argon2 lane count.
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Handles password hashing and verification using Argon2id.
///
/// The work factor is fixed at construction. Verification reads the
/// parameters embedded in the stored hash, so raising the cost later does
/// not invalidate existing hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the default work factor.
    pub fn new() -> Self {
        let params = Params::new(
            DEFAULT_MEMORY_COST_KIB,
            DEFAULT_TIME_COST,
            DEFAULT_PARALLELISM,
            None,
        )
        .unwrap_or_default();
        Self { params }
    }

    /// Creates a hasher with an explicit work factor.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> AppResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AppError::configuration(format!("Invalid password hashing parameters: {e}"))
        })?;
        Ok(Self { params })
    }

    /// Creates a hasher from auth configuration, filling unset fields with defaults.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        Self::with_params(
            config.hash_memory_kib.unwrap_or(DEFAULT_MEMORY_COST_KIB),
            config.hash_iterations.unwrap_or(DEFAULT_TIME_COST),
            config.hash_parallelism.unwrap_or(DEFAULT_PARALLELISM),
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// The digest comparison is constant time.
    pub fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// [`hash_password`](Self::hash_password) on the blocking thread pool.
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let hasher = self.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    /// [`verify_password`](Self::verify_password) on the blocking thread pool.
    pub async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = self.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
