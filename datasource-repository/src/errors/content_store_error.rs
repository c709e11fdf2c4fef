//! Content store error types.
//!
//! This module defines the error types that can occur while reading from a
//! content store.

use thiserror::Error;

/// Errors that can occur during content store operations.
#[derive(Debug, Clone, Error)]
pub enum ContentStoreError {
    /// Failed to reach the content store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A fetch or listing request failed.
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// Batch size exceeds configured maximum.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded { provided: usize, max: usize },

    /// Failed to parse stored content.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ContentStoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::FetchError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
