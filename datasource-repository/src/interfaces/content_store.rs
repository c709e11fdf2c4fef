//! Content store trait definition.
//!
//! This module defines the abstract interface the datasource reads entities
//! through, allowing for different backend implementations (a database, a
//! remote content API, an in-memory fixture, etc.).

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::errors::ContentStoreError;
use datasource_shared::EntityHandle;

/// Abstracts the store holding the entities a datasource exposes.
///
/// Implementations are injected into the datasource to enable dependency
/// injection and easy testing with mock implementations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so that several loads can run
/// concurrently against the same store.
///
/// # Timeouts
///
/// Calls may block on remote I/O and carry no internal timeout. Callers that
/// need a deadline wrap them, e.g. with `tokio::time::timeout`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch several entities in one batched request.
    ///
    /// Ids that do not exist are simply absent from the returned map.
    ///
    /// # Arguments
    ///
    /// * `entity_ids` - Distinct ids of the entities to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap)` - The entities that were found, keyed by entity id
    /// * `Err(ContentStoreError)` - If the batch fetch fails entirely
    async fn fetch_multiple(
        &self,
        entity_ids: &BTreeSet<String>,
    ) -> Result<HashMap<String, EntityHandle>, ContentStoreError>;

    /// List entity ids in a stable order.
    ///
    /// # Arguments
    ///
    /// * `offset` - Number of ids to skip
    /// * `limit` - Maximum number of ids to return
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Up to `limit` ids; empty once past the end
    /// * `Err(ContentStoreError)` - If the listing fails
    async fn list_entity_ids(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<String>, ContentStoreError>;

    /// All bundles present in the store.
    async fn bundles(&self) -> Result<BTreeSet<String>, ContentStoreError>;

    /// Check whether the store is reachable and healthy.
    async fn health_check(&self) -> Result<bool, ContentStoreError>;
}
