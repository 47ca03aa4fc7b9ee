//! Listener and browser-access settings.

use serde::{Deserialize, Serialize};

/// Where the API listens and how large a request body may be.
///
/// Missing keys fall back to [`ServerConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bodies above this many bytes are refused before JSON parsing.
    pub max_body_bytes: usize,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` as passed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            max_body_bytes: 64 * 1024,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin policy for browser clients.
///
/// A single `"*"` entry in `allowed_origins` or `allowed_headers` allows any value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        let wildcard = || vec!["*".to_owned()];
        Self {
            allowed_origins: wildcard(),
            // No route accepts PUT or DELETE.
            allowed_methods: ["GET", "POST", "OPTIONS"].map(String::from).to_vec(),
            allowed_headers: wildcard(),
            max_age_seconds: 60 * 60,
        }
    }
}

