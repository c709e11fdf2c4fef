//! Error types for the datasource repository.

mod content_store_error;

pub use content_store_error::ContentStoreError;
