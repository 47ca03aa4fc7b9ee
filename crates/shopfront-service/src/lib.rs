//! # shopfront-service
//!
//! Business logic service layer for Shopfront. Each service orchestrates
//! the store and the credential primitives to implement one use case.
//!
//! Services follow constructor injection. All dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod product;

pub use auth::AuthService;
pub use context::RequestContext;
pub use product::ProductService;
