//! Error types for the datasource pipeline.

use datasource_repository::ContentStoreError;
use thiserror::Error;

/// Errors that can occur in the datasource.
///
/// Missing entities, missing translations and filtered-out items are not
/// errors; they are left out of results.
#[derive(Error, Debug)]
pub enum DatasourceError {
    /// Error from the content store.
    #[error("Content store error: {0}")]
    Store(#[from] ContentStoreError),

    /// Invalid datasource configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasourceError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
