//! # shopfront-auth
//!
//! Credential primitives for Shopfront.
//!
//! ## Modules
//!
//! - `jwt`: session token issuance and validation (HS256)
//! - `password`: Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
