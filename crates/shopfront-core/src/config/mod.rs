//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and the process environment. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_TOKEN_TTL_HOURS};
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Prefix for structured environment overrides, e.g. `SHOPFRONT__SERVER__PORT`.
const ENV_PREFIX: &str = "SHOPFRONT";

/// Bare variable holding the token signing secret.
const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Bare variable holding the PostgreSQL connection URL.
const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Password hashing and token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `SHOPFRONT__*` variables, then the bare
    /// `JWT_SECRET` and `DATABASE_URL` variables. Both files are optional.
    pub fn load(env: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt_secret", std::env::var(JWT_SECRET_VAR).ok())?
            .set_override_option("database.url", std::env::var(DATABASE_URL_VAR).ok())?;

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an inline TOML document.
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(format!(
                "Token signing secret is not set (set {JWT_SECRET_VAR} or auth.jwt_secret)"
            )));
        }

        if self.auth.token_ttl_hours == 0 || self.auth.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}"
            )));
        }

        if self.database.provider == StoreProvider::Postgres && self.database.url.trim().is_empty()
        {
            return Err(AppError::configuration(format!(
                "Database URL is not set (set {DATABASE_URL_VAR} or database.url)"
            )));
        }

        Ok(())
    }
}
