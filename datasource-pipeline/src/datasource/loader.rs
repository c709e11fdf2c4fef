//! Bulk item loading.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, instrument};

use super::ContentEntityDatasource;
use crate::errors::DatasourceError;
use datasource_shared::{decode, CompositeItemId, IndexableItem};

impl ContentEntityDatasource {
    /// Load the items with the given ids.
    ///
    /// All referenced entities are fetched in a single batched request.
    /// Ids that are malformed, reference a missing entity or translation, or
    /// are excluded by the current configuration are left out of the result;
    /// the returned keys are always a subset of `ids`.
    ///
    /// The batch holds every distinct entity id among `ids`. A store that
    /// limits its batch size rejects larger requests, and the whole call then
    /// fails with [`DatasourceError::Store`]; callers split such id sets.
    ///
    /// # Arguments
    ///
    /// * `ids` - Composite item ids (`<entityId>:<languageCode>`)
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap)` - Loaded items keyed by the requested item id
    /// * `Err(DatasourceError::Store)` - If the batched fetch itself fails
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn load_multiple<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<HashMap<String, IndexableItem>, DatasourceError> {
        let filter = self.filter();

        let mut requested = Vec::with_capacity(ids.len());
        let mut entity_ids = BTreeSet::new();

        for item_id in ids {
            let item_id = item_id.as_ref();
            match decode(item_id) {
                Ok((entity_id, language_code)) => {
                    entity_ids.insert(entity_id.to_string());
                    requested.push((item_id, entity_id, language_code));
                }
                Err(e) => {
                    debug!(item_id = %item_id, error = %e, "Skipping malformed item id");
                }
            }
        }

        if entity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = self.store.fetch_multiple(&entity_ids).await?;

        let mut items = HashMap::with_capacity(requested.len());
        for (item_id, entity_id, language_code) in requested {
            let Some(entity) = entities.get(entity_id) else {
                debug!(item_id = %item_id, "Skipping item of missing entity");
                continue;
            };

            let Some(translation) = entity.translation(language_code) else {
                debug!(item_id = %item_id, "Skipping item of missing translation");
                continue;
            };

            if !filter.is_eligible(entity.bundle(), language_code) {
                debug!(
                    item_id = %item_id,
                    bundle = %entity.bundle(),
                    "Skipping item excluded by configuration"
                );
                continue;
            }

            let id = CompositeItemId {
                entity_id: entity_id.to_string(),
                language_code: language_code.to_string(),
            };
            // The payload always describes the requested entity and language.
            let mut payload = translation.clone();
            payload.entity_id.clone_from(&id.entity_id);
            payload.language_code.clone_from(&id.language_code);

            items.insert(
                item_id.to_string(),
                IndexableItem::new(id, entity.bundle(), payload),
            );
        }

        debug!(
            requested = ids.len(),
            entities = entities.len(),
            loaded = items.len(),
            "Loaded items"
        );
        Ok(items)
    }
}
