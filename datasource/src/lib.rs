//! # Datasource
//!
//! Main library for the content entity datasource.
//!
//! This crate wires a content store and a datasource together from the
//! environment and provides the entry point of the `datasource` binary.

pub mod config;

pub use config::{Dependencies, Environment};

use thiserror::Error;

/// Errors that can occur during initialization or execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Datasource error.
    #[error("Datasource error: {0}")]
    DatasourceError(#[from] datasource_pipeline::DatasourceError),

    /// Content store error.
    #[error("Content store error: {0}")]
    StoreError(#[from] datasource_repository::ContentStoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
