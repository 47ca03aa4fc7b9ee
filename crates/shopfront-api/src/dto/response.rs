//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token.
    pub token: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store reachability: `"connected"` or `"unavailable"`.
    pub store: String,
}
