//! # Datasource Shared
//!
//! Value types shared by the content entity datasource crates: the composite
//! item id codec, the entity handle returned by a content store, and the
//! indexable item handed to a search index.

pub mod entity;
pub mod errors;
pub mod item;
pub mod item_id;

pub use entity::{EntityHandle, EntityTranslation};
pub use errors::ItemIdError;
pub use item::IndexableItem;
pub use item_id::{decode, encode, CompositeItemId, SEPARATOR};
