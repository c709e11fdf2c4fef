//! Entity change processor implementation.
//!
//! Transforms entity changes into tracking events for a search index.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::datasource::ContentEntityDatasource;
use crate::processor::events::{EntityChange, TrackingEvent};
use datasource_shared::encode;

/// Processor that keeps a search index's item tracker in sync with the
/// content store.
///
/// The processor is responsible for:
/// - Expanding an entity change into the item ids of its translations
/// - Filtering out translations the datasource does not index
/// - Splitting updates into inserted, updated and deleted translations
pub struct ChangeProcessor {
    datasource: Arc<ContentEntityDatasource>,
}

impl ChangeProcessor {
    /// Create a new change processor for the given datasource.
    pub fn new(datasource: Arc<ContentEntityDatasource>) -> Self {
        Self { datasource }
    }

    /// Process a batch of entity changes, in order.
    ///
    /// # Arguments
    ///
    /// * `changes` - The changes to process
    ///
    /// # Returns
    ///
    /// The tracking events to apply. Changes that touch no tracked item
    /// produce no events.
    #[instrument(skip(self, changes), fields(change_count = changes.len()))]
    pub fn process_batch(&self, changes: Vec<EntityChange>) -> Vec<TrackingEvent> {
        let mut events = Vec::with_capacity(changes.len());

        for change in changes {
            events.extend(self.process_change(change));
        }

        debug!(event_count = events.len(), "Processed change batch");
        events
    }

    /// Process a single entity change.
    fn process_change(&self, change: EntityChange) -> Vec<TrackingEvent> {
        let entity_id = change.entity_id().to_string();

        let events: Vec<TrackingEvent> = match change {
            EntityChange::Inserted(entity) => {
                vec![TrackingEvent::Inserted(
                    self.datasource.item_ids_for_entity(&entity),
                )]
            }
            EntityChange::Updated {
                previous_languages,
                entity,
            } => {
                let filter = self.datasource.filter();
                let mut updated = Vec::new();
                let mut inserted = Vec::new();

                for language_code in entity.languages() {
                    if !filter.is_eligible(entity.bundle(), language_code) {
                        continue;
                    }
                    let item_id = encode(&entity.entity_id, language_code);
                    if previous_languages.contains(language_code) {
                        updated.push(item_id);
                    } else {
                        inserted.push(item_id);
                    }
                }

                let deleted = previous_languages
                    .iter()
                    .filter(|language_code| entity.translation(language_code).is_none())
                    .map(|language_code| encode(&entity.entity_id, language_code))
                    .collect();

                vec![
                    TrackingEvent::Updated(updated),
                    TrackingEvent::Inserted(inserted),
                    TrackingEvent::Deleted(deleted),
                ]
            }
            EntityChange::Deleted {
                entity_id,
                languages,
            } => {
                vec![TrackingEvent::Deleted(
                    languages
                        .iter()
                        .map(|language_code| encode(&entity_id, language_code))
                        .collect(),
                )]
            }
        };

        let events: Vec<TrackingEvent> = events
            .into_iter()
            .filter(|event| !event.item_ids().is_empty())
            .collect();

        debug!(
            entity_id = %entity_id,
            event_count = events.len(),
            "Processed entity change"
        );
        events
    }
}
