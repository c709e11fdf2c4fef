//! Content entity datasource.
//!
//! Exposes every eligible translation of every entity in a content store as
//! an indexable item.

mod loader;
mod tracking;

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, instrument};

use crate::config::{DatasourceConfig, DatasourceSettings};
use crate::errors::DatasourceError;
use crate::filter::BundleLanguageFilter;
use datasource_repository::ContentStore;
use datasource_shared::{decode, IndexableItem};

/// Configuration and the filter derived from it, swapped as one unit.
#[derive(Debug)]
struct Selection {
    config: DatasourceConfig,
    filter: Arc<BundleLanguageFilter>,
}

impl Selection {
    fn new(config: DatasourceConfig) -> Self {
        let filter = Arc::new(BundleLanguageFilter::from_config(&config));
        Self { config, filter }
    }
}

/// Datasource over the entities of a content store.
///
/// The datasource holds no per-call state. Its configuration is replaced
/// wholesale by [`set_configuration`](Self::set_configuration); each
/// operation works on one snapshot of the filter, so it never observes a
/// half-applied reconfiguration.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryContentStore::new());
/// let datasource = ContentEntityDatasource::new(store, DatasourceConfig::default());
///
/// let items = datasource.load_multiple(&["1:en", "1:de"]).await?;
/// for (item_id, item) in &items {
///     println!("{} is a {}", item_id, item.bundle);
/// }
/// ```
pub struct ContentEntityDatasource {
    store: Arc<dyn ContentStore>,
    selection: RwLock<Arc<Selection>>,
    settings: DatasourceSettings,
}

impl ContentEntityDatasource {
    /// Create a datasource with default settings.
    pub fn new(store: Arc<dyn ContentStore>, config: DatasourceConfig) -> Self {
        Self::with_settings(store, config, DatasourceSettings::default())
    }

    /// Create a datasource with custom settings.
    pub fn with_settings(
        store: Arc<dyn ContentStore>,
        config: DatasourceConfig,
        settings: DatasourceSettings,
    ) -> Self {
        Self {
            store,
            selection: RwLock::new(Arc::new(Selection::new(config))),
            settings,
        }
    }

    /// Replace the configuration and the filter derived from it.
    #[instrument(skip(self, config))]
    pub fn set_configuration(&self, config: DatasourceConfig) {
        let selection = Arc::new(Selection::new(config));
        info!(
            bundles_default = selection.config.bundles.default,
            bundles = ?selection.config.bundles.selected,
            languages_default = selection.config.languages.default,
            languages = ?selection.config.languages.selected,
            "Datasource reconfigured"
        );

        *self
            .selection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = selection;
    }

    /// The current configuration.
    pub fn configuration(&self) -> DatasourceConfig {
        self.selection().config.clone()
    }

    /// The current filter.
    pub fn filter(&self) -> Arc<BundleLanguageFilter> {
        self.selection().filter.clone()
    }

    /// Runtime settings of this datasource.
    pub fn settings(&self) -> &DatasourceSettings {
        &self.settings
    }

    /// Bundles in the content store that the current configuration indexes.
    pub async fn bundles(&self) -> Result<BTreeSet<String>, DatasourceError> {
        let filter = self.filter();
        let bundles = self.store.bundles().await?;
        Ok(bundles
            .into_iter()
            .filter(|bundle| filter.is_bundle_eligible(bundle))
            .collect())
    }

    /// Check whether the underlying content store is healthy.
    pub async fn health_check(&self) -> Result<bool, DatasourceError> {
        Ok(self.store.health_check().await?)
    }

    /// Item id of a loaded item.
    pub fn item_id(item: &IndexableItem) -> String {
        item.item_id()
    }

    /// Language code part of an item id, or `None` if the id is malformed.
    pub fn item_language(item_id: &str) -> Option<&str> {
        decode(item_id).ok().map(|(_, language_code)| language_code)
    }

    /// Entity id part of an item id, or `None` if the id is malformed.
    pub fn item_entity_id(item_id: &str) -> Option<&str> {
        decode(item_id).ok().map(|(entity_id, _)| entity_id)
    }

    fn selection(&self) -> Arc<Selection> {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
