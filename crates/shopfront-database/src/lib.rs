//! # shopfront-database
//!
//! The store collaborator for Shopfront: the [`UserStore`] and
//! [`ProductStore`] traits, their PostgreSQL implementations, an in-memory
//! implementation, and connection/migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::StoreManager;
pub use store::{ProductStore, UserStore};
