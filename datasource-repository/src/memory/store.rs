//! In-memory content store implementation.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::config::ContentStoreConfig;
use crate::errors::ContentStoreError;
use crate::interfaces::ContentStore;
use datasource_shared::EntityHandle;

/// Content store keeping entities in a map, ordered by entity id.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryContentStore::new();
/// store
///     .insert(EntityHandle::new("1", "article").with_translation("en"))
///     .await;
/// let found = store.fetch_multiple(&["1".to_string()].into()).await?;
/// ```
pub struct InMemoryContentStore {
    entities: RwLock<BTreeMap<String, EntityHandle>>,
    config: ContentStoreConfig,
}

impl InMemoryContentStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(ContentStoreConfig::default())
    }

    /// Create an empty store with custom configuration.
    pub fn with_config(config: ContentStoreConfig) -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
            config,
        }
    }

    /// Create a store holding the given entities.
    ///
    /// Translations take their entity id and language code from the entity
    /// and map key they are stored under.
    pub fn from_entities(
        entities: impl IntoIterator<Item = EntityHandle>,
        config: ContentStoreConfig,
    ) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.entity_id.clone(), entity.normalized()))
            .collect();

        Self {
            entities: RwLock::new(entities),
            config,
        }
    }

    /// Create a store from a JSON array of entities.
    pub fn from_json_str(json: &str, config: ContentStoreConfig) -> Result<Self, ContentStoreError> {
        let entities: Vec<EntityHandle> = serde_json::from_str(json)
            .map_err(|e| ContentStoreError::parse(format!("Invalid entity fixture: {}", e)))?;

        Ok(Self::from_entities(entities, config))
    }

    /// Create a store from a JSON fixture file.
    #[instrument(skip(path, config), fields(path = %path.as_ref().display()))]
    pub async fn from_json_file(
        path: impl AsRef<Path>,
        config: ContentStoreConfig,
    ) -> Result<Self, ContentStoreError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await.map_err(|e| {
            ContentStoreError::fetch(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let store = Self::from_json_str(&json, config)?;
        info!(entity_count = store.len().await, "Loaded entity fixture");
        Ok(store)
    }

    /// Insert an entity, replacing any entity with the same id.
    pub async fn insert(&self, entity: EntityHandle) -> Option<EntityHandle> {
        let entity = entity.normalized();
        self.entities
            .write()
            .await
            .insert(entity.entity_id.clone(), entity)
    }

    /// Remove an entity.
    pub async fn remove(&self, entity_id: &str) -> Option<EntityHandle> {
        self.entities.write().await.remove(entity_id)
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Whether the store holds no entities.
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn fetch_multiple(
        &self,
        entity_ids: &BTreeSet<String>,
    ) -> Result<HashMap<String, EntityHandle>, ContentStoreError> {
        self.config.check_batch(entity_ids.len())?;

        let entities = self.entities.read().await;
        let found: HashMap<String, EntityHandle> = entity_ids
            .iter()
            .filter_map(|id| entities.get(id).map(|entity| (id.clone(), entity.clone())))
            .collect();

        debug!(
            requested = entity_ids.len(),
            found = found.len(),
            "Fetched entities"
        );
        Ok(found)
    }

    async fn list_entity_ids(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<String>, ContentStoreError> {
        let entities = self.entities.read().await;
        Ok(entities.keys().skip(offset).take(limit).cloned().collect())
    }

    async fn bundles(&self) -> Result<BTreeSet<String>, ContentStoreError> {
        let entities = self.entities.read().await;
        Ok(entities.values().map(|e| e.bundle.clone()).collect())
    }

    async fn health_check(&self) -> Result<bool, ContentStoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    async fn sample_store() -> InMemoryContentStore {
        let store = InMemoryContentStore::new();
        store
            .insert(EntityHandle::new("1", "item").with_translation("l0"))
            .await;
        store
            .insert(EntityHandle::new("2", "article").with_translation("l0"))
            .await;
        store
            .insert(EntityHandle::new("3", "article").with_translation("l1"))
            .await;
        store
    }

    #[tokio::test]
    async fn test_fetch_multiple_skips_missing() {
        let store = sample_store().await;

        let found = store.fetch_multiple(&ids(&["1", "3", "99"])).await.unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found["1"].bundle, "item");
        assert_eq!(found["3"].bundle, "article");
        assert!(!found.contains_key("99"));
    }

    #[tokio::test]
    async fn test_fetch_multiple_batch_limit() {
        let store = InMemoryContentStore::with_config(ContentStoreConfig::with_max_batch_size(2));

        let result = store.fetch_multiple(&ids(&["1", "2", "3"])).await;

        assert!(matches!(
            result,
            Err(ContentStoreError::BatchSizeExceeded { provided: 3, max: 2 })
        ));
    }

    #[tokio::test]
    async fn test_list_entity_ids_pages() {
        let store = sample_store().await;

        assert_eq!(store.list_entity_ids(0, 2).await.unwrap(), vec!["1", "2"]);
        assert_eq!(store.list_entity_ids(2, 2).await.unwrap(), vec!["3"]);
        assert!(store.list_entity_ids(4, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bundles_are_distinct() {
        let store = sample_store().await;
        assert_eq!(store.bundles().await.unwrap(), ids(&["article", "item"]));
    }

    #[tokio::test]
    async fn test_remove_entity() {
        let store = sample_store().await;

        assert!(store.remove("2").await.is_some());
        assert!(store.remove("2").await.is_none());
        assert_eq!(store.len().await, 2);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"entity_id": "1", "bundle": "item", "translations": {
                "l0": {"entity_id": "1", "language_code": "l0", "changed_at": "2024-01-01T00:00:00Z"}
            }}
        ]"#;

        let store = InMemoryContentStore::from_json_str(json, ContentStoreConfig::default()).unwrap();
        let entities = store.entities.try_read().unwrap();
        assert!(entities["1"].translation("l0").is_some());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = InMemoryContentStore::from_json_str("{", ContentStoreConfig::default());
        assert!(matches!(result, Err(ContentStoreError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_fixture_translations_match_their_entity_and_key() {
        let json = r#"[
            {"entity_id": "1", "bundle": "item", "translations": {
                "l0": {"entity_id": "7", "language_code": "en", "changed_at": "2024-01-01T00:00:00Z"}
            }}
        ]"#;
        let store = InMemoryContentStore::from_json_str(json, ContentStoreConfig::default()).unwrap();

        let found = store.fetch_multiple(&ids(&["1"])).await.unwrap();
        let translation = found["1"].translation("l0").unwrap();

        assert_eq!(translation.entity_id, "1");
        assert_eq!(translation.language_code, "l0");
        assert!(found["1"].translation("en").is_none());
    }

    #[tokio::test]
    async fn test_insert_normalizes_translations() {
        let mut entity = EntityHandle::new("4", "page").with_translation("de");
        if let Some(translation) = entity.translations.get_mut("de") {
            translation.entity_id = "other".to_string();
            translation.language_code = "fr".to_string();
        }

        let store = InMemoryContentStore::new();
        store.insert(entity).await;

        let found = store.fetch_multiple(&ids(&["4"])).await.unwrap();
        let translation = found["4"].translation("de").unwrap();
        assert_eq!(translation.entity_id, "4");
        assert_eq!(translation.language_code, "de");
    }

    #[tokio::test]
    async fn test_from_json_file_missing_is_fetch_error() {
        let result = InMemoryContentStore::from_json_file(
            "/nonexistent/datasource/fixture.json",
            ContentStoreConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(ContentStoreError::FetchError(_))));
    }
}
