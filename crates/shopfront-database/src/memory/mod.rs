//! Process-local store backed by in-memory tables.

pub mod store;

pub use store::MemoryStore;
