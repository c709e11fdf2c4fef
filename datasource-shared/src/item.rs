//! Indexable item type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::EntityTranslation;
use crate::item_id::CompositeItemId;

/// A single translation of an entity, ready to be handed to a search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexableItem {
    /// Item id (entity id and language code).
    pub id: CompositeItemId,
    /// Bundle of the underlying entity.
    pub bundle: String,
    /// The translation's content.
    pub payload: EntityTranslation,
    /// When the item was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl IndexableItem {
    /// Create an item for the given translation, loaded now.
    pub fn new(id: CompositeItemId, bundle: impl Into<String>, payload: EntityTranslation) -> Self {
        Self {
            id,
            bundle: bundle.into(),
            payload,
            loaded_at: Utc::now(),
        }
    }

    /// Canonical composite id of this item.
    pub fn item_id(&self) -> String {
        self.id.encode()
    }

    /// Language code of this item.
    pub fn language(&self) -> &str {
        &self.id.language_code
    }
}
