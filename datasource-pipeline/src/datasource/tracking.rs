//! Item id enumeration, used to fill and maintain an index's item tracker.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use super::ContentEntityDatasource;
use crate::errors::DatasourceError;
use crate::filter::BundleLanguageFilter;
use datasource_shared::{encode, EntityHandle};

impl ContentEntityDatasource {
    /// Ids of all eligible translations of an entity, sorted.
    pub fn item_ids_for_entity(&self, entity: &EntityHandle) -> Vec<String> {
        eligible_item_ids(&self.filter(), entity)
    }

    /// One page of all eligible item ids in the content store.
    ///
    /// Pages are `page_size` entities wide, so a page can hold more or fewer
    /// item ids than that.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ids))` - The item ids of the page, possibly empty when no
    ///   entity on it is eligible
    /// * `Ok(None)` - If the page lies past the last entity
    /// * `Err(DatasourceError)` - If listing or fetching fails
    #[instrument(skip(self))]
    pub async fn partial_item_ids(&self, page: usize) -> Result<Option<Vec<String>>, DatasourceError> {
        let filter = self.filter();
        let page_size = self.settings.page_size;

        let entity_ids = self
            .store
            .list_entity_ids(page.saturating_mul(page_size), page_size)
            .await?;
        if entity_ids.is_empty() {
            return Ok(None);
        }

        let entity_ids: BTreeSet<String> = entity_ids.into_iter().collect();
        let entities = self.store.fetch_multiple(&entity_ids).await?;

        let mut item_ids = Vec::new();
        for entity_id in &entity_ids {
            if let Some(entity) = entities.get(entity_id) {
                item_ids.extend(eligible_item_ids(&filter, entity));
            }
        }

        debug!(
            entities = entity_ids.len(),
            item_ids = item_ids.len(),
            "Enumerated item id page"
        );
        Ok(Some(item_ids))
    }

    /// All eligible item ids in the content store, page by page.
    pub async fn all_item_ids(&self) -> Result<Vec<String>, DatasourceError> {
        let mut item_ids = Vec::new();
        let mut page = 0;
        while let Some(ids) = self.partial_item_ids(page).await? {
            item_ids.extend(ids);
            page += 1;
        }
        Ok(item_ids)
    }
}

/// Ids of the translations of `entity` accepted by `filter`, sorted.
pub(crate) fn eligible_item_ids(filter: &BundleLanguageFilter, entity: &EntityHandle) -> Vec<String> {
    entity
        .languages()
        .filter(|language_code| filter.is_eligible(entity.bundle(), language_code))
        .map(|language_code| encode(&entity.entity_id, language_code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatasourceConfig, DatasourceSettings, SelectionConfig};
    use datasource_repository::InMemoryContentStore;
    use std::sync::Arc;

    fn store() -> Arc<InMemoryContentStore> {
        Arc::new(InMemoryContentStore::from_entities(
            [
                EntityHandle::new("1", "item")
                    .with_translation("l0")
                    .with_translation("l1"),
                EntityHandle::new("2", "article")
                    .with_translation("l0")
                    .with_translation("l1"),
                EntityHandle::new("3", "item").with_translation("l1"),
            ],
            Default::default(),
        ))
    }

    #[test]
    fn test_item_ids_for_entity() {
        let datasource = ContentEntityDatasource::new(
            store(),
            DatasourceConfig::new(SelectionConfig::all(), SelectionConfig::except(["l0"])),
        );
        let entity = EntityHandle::new("5", "item")
            .with_translation("l1")
            .with_translation("l0")
            .with_translation("l2");

        assert_eq!(datasource.item_ids_for_entity(&entity), vec!["5:l1", "5:l2"]);
    }

    #[tokio::test]
    async fn test_partial_item_ids_pages() {
        let datasource = ContentEntityDatasource::with_settings(
            store(),
            DatasourceConfig::default(),
            DatasourceSettings::with_page_size(2).unwrap(),
        );

        assert_eq!(
            datasource.partial_item_ids(0).await.unwrap(),
            Some(vec![
                "1:l0".to_string(),
                "1:l1".to_string(),
                "2:l0".to_string(),
                "2:l1".to_string()
            ])
        );
        assert_eq!(
            datasource.partial_item_ids(1).await.unwrap(),
            Some(vec!["3:l1".to_string()])
        );
        assert_eq!(datasource.partial_item_ids(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_partial_item_ids_empty_page_is_not_end() {
        let datasource = ContentEntityDatasource::with_settings(
            store(),
            DatasourceConfig::new(SelectionConfig::only(["article"]), SelectionConfig::all()),
            DatasourceSettings::with_page_size(1).unwrap(),
        );

        assert_eq!(datasource.partial_item_ids(0).await.unwrap(), Some(vec![]));
        assert_eq!(datasource.all_item_ids().await.unwrap(), vec!["2:l0", "2:l1"]);
    }

    #[tokio::test]
    async fn test_all_item_ids_respects_filter() {
        let datasource = ContentEntityDatasource::new(
            store(),
            DatasourceConfig::new(SelectionConfig::only(["item"]), SelectionConfig::only(["l1"])),
        );

        assert_eq!(datasource.all_item_ids().await.unwrap(), vec!["1:l1", "3:l1"]);
    }
}
