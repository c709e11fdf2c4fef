//! Composite item id codec.
//!
//! An item is one translation of one entity. Its id is the entity id and the
//! language code joined with [`SEPARATOR`], e.g. `"42:en"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ItemIdError;

/// Separator between the entity id and the language code.
pub const SEPARATOR: char = ':';

/// Join an entity id and a language code into a composite item id.
///
/// No escaping is performed. Callers must make sure neither part contains
/// [`SEPARATOR`]; use [`CompositeItemId::new`] for a checked variant.
pub fn encode(entity_id: &str, language_code: &str) -> String {
    format!("{}{}{}", entity_id, SEPARATOR, language_code)
}

/// Split a composite item id on the first separator.
///
/// # Returns
///
/// * `Ok((entity_id, language_code))` - The two id components
/// * `Err(ItemIdError::Malformed)` - If the id contains no separator
pub fn decode(composite_id: &str) -> Result<(&str, &str), ItemIdError> {
    composite_id
        .split_once(SEPARATOR)
        .ok_or_else(|| ItemIdError::malformed(composite_id))
}

/// A decoded composite item id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompositeItemId {
    /// Id of the entity in the content store.
    pub entity_id: String,
    /// Language code of the translation.
    pub language_code: String,
}

impl CompositeItemId {
    /// Create an item id, rejecting components that contain the separator.
    pub fn new(
        entity_id: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Result<Self, ItemIdError> {
        let entity_id = entity_id.into();
        let language_code = language_code.into();

        for component in [&entity_id, &language_code] {
            if component.contains(SEPARATOR) {
                return Err(ItemIdError::separator_in_component(component.as_str()));
            }
        }

        Ok(Self {
            entity_id,
            language_code,
        })
    }

    /// Parse a composite item id.
    ///
    /// Everything after the first separator is the language code.
    pub fn parse(composite_id: &str) -> Result<Self, ItemIdError> {
        let (entity_id, language_code) = decode(composite_id)?;
        Ok(Self {
            entity_id: entity_id.to_string(),
            language_code: language_code.to_string(),
        })
    }

    /// Canonical textual form of this id.
    pub fn encode(&self) -> String {
        encode(&self.entity_id, &self.language_code)
    }
}

impl fmt::Display for CompositeItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.entity_id, SEPARATOR, self.language_code)
    }
}

impl FromStr for CompositeItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
