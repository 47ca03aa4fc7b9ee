//! Product creation and listing.

pub mod service;

pub use service::ProductService;
