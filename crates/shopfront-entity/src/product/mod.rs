//! Product domain entities.

pub mod model;

pub use model::{CreateProduct, OwnerSummary, Product, ProductWithOwner};
