//! Entity types returned by a content store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One language variant of an entity.
///
/// This is the plain owned payload handed to a search index; it carries the
/// translated field values and nothing tied to a particular object model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTranslation {
    /// Id of the entity this translation belongs to.
    pub entity_id: String,
    /// Language code of this translation.
    pub language_code: String,
    /// Translated field values.
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// When this translation was last changed.
    pub changed_at: DateTime<Utc>,
}

impl EntityTranslation {
    /// Create a translation with no field values, changed now.
    pub fn new(entity_id: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            language_code: language_code.into(),
            fields: Map::new(),
            changed_at: Utc::now(),
        }
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// An entity as fetched from a content store, with all its translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityHandle {
    /// Id of the entity in the content store.
    pub entity_id: String,
    /// Bundle (sub-type) of the entity.
    pub bundle: String,
    /// Available translations keyed by language code.
    #[serde(default)]
    pub translations: BTreeMap<String, EntityTranslation>,
}

impl EntityHandle {
    /// Create an entity with no translations.
    pub fn new(entity_id: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            bundle: bundle.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Add an empty translation for the given language.
    pub fn with_translation(self, language_code: impl Into<String>) -> Self {
        let translation = EntityTranslation::new(self.entity_id.clone(), language_code);
        self.with_translation_payload(translation)
    }

    /// Add a translation. Its entity id is overwritten with this entity's id.
    pub fn with_translation_payload(mut self, mut translation: EntityTranslation) -> Self {
        translation.entity_id = self.entity_id.clone();
        self.translations
            .insert(translation.language_code.clone(), translation);
        self
    }

    /// Make every translation carry this entity's id and the language code
    /// it is keyed under.
    pub fn normalized(mut self) -> Self {
        for (language_code, translation) in self.translations.iter_mut() {
            translation.entity_id.clone_from(&self.entity_id);
            translation.language_code.clone_from(language_code);
        }
        self
    }

    /// Bundle of the entity.
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// Translation for the given language, if the entity has one.
    pub fn translation(&self, language_code: &str) -> Option<&EntityTranslation> {
        self.translations.get(language_code)
    }

    /// Language codes of all available translations, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_translation_lookup() {
        let entity = EntityHandle::new("1", "item")
            .with_translation("l0")
            .with_translation("l1");

        assert_eq!(entity.bundle(), "item");
        assert!(entity.translation("l0").is_some());
        assert!(entity.translation("l2").is_none());
        assert_eq!(entity.languages().collect::<Vec<_>>(), vec!["l0", "l1"]);
    }

    #[test]
    fn test_translation_payload_takes_entity_id() {
        let translation = EntityTranslation::new("other", "en").with_field("title", "Hello");
        let entity = EntityHandle::new("7", "article").with_translation_payload(translation);

        let en = entity.translation("en").unwrap();
        assert_eq!(en.entity_id, "7");
        assert_eq!(en.fields.get("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_normalized_overwrites_mismatched_translation() {
        let entity: EntityHandle = serde_json::from_value(json!({
            "entity_id": "1",
            "bundle": "item",
            "translations": {
                "l0": {"entity_id": "7", "language_code": "en", "changed_at": "2024-01-01T00:00:00Z"}
            }
        }))
        .unwrap();

        let entity = entity.normalized();
        let l0 = entity.translation("l0").unwrap();
        assert_eq!(l0.entity_id, "1");
        assert_eq!(l0.language_code, "l0");
    }

    #[test]
    fn test_deserialize_entity_without_translations() {
        let entity: EntityHandle =
            serde_json::from_value(json!({"entity_id": "3", "bundle": "page"})).unwrap();
        assert_eq!(entity.languages().count(), 0);
    }
}
