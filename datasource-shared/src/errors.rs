//! Item id error types.

use thiserror::Error;

/// Errors produced while building or parsing composite item ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemIdError {
    /// The id has no separator between entity id and language code.
    #[error("Malformed item id: {0}")]
    Malformed(String),

    /// An id component contains the separator and would not round-trip.
    #[error("Separator in item id component: {0}")]
    SeparatorInComponent(String),
}

impl ItemIdError {
    /// Create a malformed id error.
    pub fn malformed(id: impl Into<String>) -> Self {
        Self::Malformed(id.into())
    }

    /// Create a separator-in-component error.
    pub fn separator_in_component(component: impl Into<String>) -> Self {
        Self::SeparatorInComponent(component.into())
    }
}
