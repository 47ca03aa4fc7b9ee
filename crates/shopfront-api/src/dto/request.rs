//! Request DTOs with validation.
//!
//! Unknown fields are ignored.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Create product request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product title.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Price, zero or more.
    #[validate(range(min = 0.0, message = "price must be a non-negative number"))]
    pub price: f64,
    /// Owning user ID. Not checked against existing users.
    pub owner_id: Uuid,
}
