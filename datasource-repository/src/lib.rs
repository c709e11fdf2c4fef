//! # Datasource Repository
//!
//! This crate provides the content store contract consumed by the datasource,
//! its error type, and an in-memory implementation used for fixtures and
//! tests.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;

pub use config::ContentStoreConfig;
pub use errors::ContentStoreError;
pub use interfaces::ContentStore;
pub use memory::InMemoryContentStore;
