//! Bundle and language eligibility.

use std::collections::BTreeSet;

use crate::config::{DatasourceConfig, SelectionConfig};

/// How the configured values of one axis are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Every value is eligible except the listed ones.
    Default,
    /// Only the listed values are eligible.
    Explicit,
}

impl SelectionMode {
    fn accepts(self, values: &BTreeSet<String>, value: &str) -> bool {
        match self {
            Self::Default => !values.contains(value),
            Self::Explicit => values.contains(value),
        }
    }
}

/// Immutable bundle/language filter built from a [`DatasourceConfig`].
///
/// Evaluation only reads the filter, so a shared filter needs no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLanguageFilter {
    bundle_mode: SelectionMode,
    bundles: BTreeSet<String>,
    language_mode: SelectionMode,
    languages: BTreeSet<String>,
}

impl BundleLanguageFilter {
    /// Create a filter from explicit modes and value sets.
    pub fn new(
        bundle_mode: SelectionMode,
        bundles: BTreeSet<String>,
        language_mode: SelectionMode,
        languages: BTreeSet<String>,
    ) -> Self {
        Self {
            bundle_mode,
            bundles,
            language_mode,
            languages,
        }
    }

    /// A filter accepting every bundle and language.
    pub fn allow_all() -> Self {
        Self::from_config(&DatasourceConfig::default())
    }

    /// Build the filter described by a datasource configuration.
    pub fn from_config(config: &DatasourceConfig) -> Self {
        let (bundle_mode, bundles) = axis(&config.bundles);
        let (language_mode, languages) = axis(&config.languages);
        Self::new(bundle_mode, bundles, language_mode, languages)
    }

    /// Whether items of this bundle may be indexed.
    pub fn is_bundle_eligible(&self, bundle: &str) -> bool {
        self.bundle_mode.accepts(&self.bundles, bundle)
    }

    /// Whether items in this language may be indexed.
    pub fn is_language_eligible(&self, language_code: &str) -> bool {
        self.language_mode.accepts(&self.languages, language_code)
    }

    /// Whether an item of this bundle and language may be indexed.
    pub fn is_eligible(&self, bundle: &str, language_code: &str) -> bool {
        self.is_bundle_eligible(bundle) && self.is_language_eligible(language_code)
    }
}

impl Default for BundleLanguageFilter {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl From<&DatasourceConfig> for BundleLanguageFilter {
    fn from(config: &DatasourceConfig) -> Self {
        Self::from_config(config)
    }
}

fn axis(selection: &SelectionConfig) -> (SelectionMode, BTreeSet<String>) {
    let mode = if selection.default {
        SelectionMode::Default
    } else {
        SelectionMode::Explicit
    };
    (mode, selection.selected.clone())
}
