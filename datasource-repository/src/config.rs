//! Content store limits.

use crate::errors::ContentStoreError;

/// Default maximum number of entities per batched fetch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Limits applied by a content store to incoming requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStoreConfig {
    /// Largest number of entity ids accepted by one `fetch_multiple` call,
    /// or `None` for no limit.
    pub max_batch_size: Option<usize>,
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self::with_max_batch_size(DEFAULT_MAX_BATCH_SIZE)
    }
}

impl ContentStoreConfig {
    /// Accept batches of any size.
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
        }
    }

    /// Accept batches of at most `max_batch_size` entities.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }

    /// Whether a batch of `size` entity ids may be fetched in one request.
    pub fn accepts_batch(&self, size: usize) -> bool {
        self.max_batch_size.map_or(true, |max| size <= max)
    }

    /// Reject a batch of `size` entity ids that is over the limit.
    pub fn check_batch(&self, size: usize) -> Result<(), ContentStoreError> {
        match self.max_batch_size {
            Some(max) if size > max => Err(ContentStoreError::batch_size_exceeded(size, max)),
            _ => Ok(()),
        }
    }
}
