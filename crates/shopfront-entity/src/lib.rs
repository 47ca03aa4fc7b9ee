//! # shopfront-entity
//!
//! Domain entity models for Shopfront. Every struct in this crate
//! represents a database table row, a write payload, or a public projection.
//! Row types additionally derive `sqlx::FromRow`.

pub mod product;
pub mod user;

pub use product::{CreateProduct, OwnerSummary, Product, ProductWithOwner};
pub use user::{CreateUser, PublicUser, User};
