//! Event types for the change processor.

use std::collections::BTreeSet;

use datasource_shared::EntityHandle;

/// A change to an entity in the content store.
#[derive(Debug, Clone)]
pub enum EntityChange {
    /// Entity was created.
    Inserted(EntityHandle),
    /// Entity was saved again, possibly gaining or losing translations.
    Updated {
        /// Language codes of the translations before the change.
        previous_languages: BTreeSet<String>,
        /// The entity after the change.
        entity: EntityHandle,
    },
    /// Entity was deleted along with all its translations.
    Deleted {
        /// The entity's id.
        entity_id: String,
        /// Language codes of the translations it had.
        languages: BTreeSet<String>,
    },
}

impl EntityChange {
    /// Id of the changed entity.
    pub fn entity_id(&self) -> &str {
        match self {
            Self::Inserted(entity) | Self::Updated { entity, .. } => &entity.entity_id,
            Self::Deleted { entity_id, .. } => entity_id,
        }
    }
}

/// A change to the set of item ids tracked by a search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    /// Items that should start being tracked.
    Inserted(Vec<String>),
    /// Tracked items whose content changed.
    Updated(Vec<String>),
    /// Items that should no longer be tracked.
    Deleted(Vec<String>),
}

impl TrackingEvent {
    /// Item ids carried by this event.
    pub fn item_ids(&self) -> &[String] {
        match self {
            Self::Inserted(ids) | Self::Updated(ids) | Self::Deleted(ids) => ids,
        }
    }
}
