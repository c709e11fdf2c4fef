//! # Datasource Pipeline
//!
//! This crate provides the content entity datasource feeding a search index.
//!
//! ## Architecture
//!
//! An item is one translation of one entity, identified by
//! `<entityId>:<languageCode>`. The datasource is built from:
//!
//! 1. **Config**: Which bundles and languages are indexed
//! 2. **Filter**: Evaluates bundle/language eligibility from the config
//! 3. **Datasource**: Bulk-loads items by id and enumerates item ids
//! 4. **Processor**: Turns entity change events into item tracking events

pub mod config;
pub mod datasource;
pub mod errors;
pub mod filter;
pub mod processor;

pub use config::{DatasourceConfig, DatasourceSettings, SelectionConfig};
pub use datasource::ContentEntityDatasource;
pub use errors::DatasourceError;
pub use filter::{BundleLanguageFilter, SelectionMode};
pub use processor::{ChangeProcessor, EntityChange, TrackingEvent};
