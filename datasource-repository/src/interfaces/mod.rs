//! Interface definitions for content stores.
//!
//! This module defines the abstract `ContentStore` trait that allows for
//! dependency injection and swappable storage backends.

mod content_store;

pub use content_store::ContentStore;
