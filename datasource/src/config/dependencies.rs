//! Dependency initialization and wiring for the datasource.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppError;
use datasource_pipeline::config::DEFAULT_PAGE_SIZE;
use datasource_pipeline::{ContentEntityDatasource, DatasourceConfig, DatasourceSettings};
use datasource_repository::config::DEFAULT_MAX_BATCH_SIZE;
use datasource_repository::{ContentStoreConfig, InMemoryContentStore};

/// Settings read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// JSON fixture holding the entities of the content store.
    pub content_fixture_path: PathBuf,
    /// Optional JSON datasource configuration.
    pub datasource_config_path: Option<PathBuf>,
    /// Entities per page when enumerating item ids.
    pub page_size: usize,
    /// Maximum number of entities per batched fetch.
    pub max_batch_size: usize,
}

impl Environment {
    /// Read settings from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `CONTENT_FIXTURE_PATH`: entity fixture file (required)
    /// - `DATASOURCE_CONFIG_PATH`: datasource configuration file (default: index everything)
    /// - `DATASOURCE_PAGE_SIZE`: enumeration page size (default: 100)
    /// - `CONTENT_MAX_BATCH_SIZE`: batched fetch limit (default: 1000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let content_fixture_path = lookup("CONTENT_FIXTURE_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| AppError::config("CONTENT_FIXTURE_PATH is not set"))?;
        let datasource_config_path = lookup("DATASOURCE_CONFIG_PATH").map(PathBuf::from);
        let page_size = parse_usize(&lookup, "DATASOURCE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_batch_size = parse_usize(&lookup, "CONTENT_MAX_BATCH_SIZE", DEFAULT_MAX_BATCH_SIZE)?;

        let environment = Self {
            content_fixture_path,
            datasource_config_path,
            page_size,
            max_batch_size,
        };
        environment.validate()?;
        Ok(environment)
    }

    /// Check that every enumeration page fits in one batched fetch.
    pub fn validate(&self) -> Result<(), AppError> {
        let store_config = ContentStoreConfig::with_max_batch_size(self.max_batch_size);
        if !store_config.accepts_batch(self.page_size) {
            return Err(AppError::config(format!(
                "DATASOURCE_PAGE_SIZE={} exceeds CONTENT_MAX_BATCH_SIZE={}",
                self.page_size, self.max_batch_size
            )));
        }
        Ok(())
    }
}

fn parse_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, AppError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {}={}: {}", key, value, e))),
        None => Ok(default),
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured datasource.
    pub datasource: Arc<ContentEntityDatasource>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`Environment::from_env`] for the variables read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If initialization fails
    pub async fn new() -> Result<Self, AppError> {
        Self::from_environment(&Environment::from_env()?).await
    }

    /// Initialize all dependencies from already-read settings.
    pub async fn from_environment(environment: &Environment) -> Result<Self, AppError> {
        environment.validate()?;

        info!(
            content_fixture_path = %environment.content_fixture_path.display(),
            datasource_config_path = ?environment.datasource_config_path,
            page_size = environment.page_size,
            max_batch_size = environment.max_batch_size,
            "Initializing dependencies"
        );

        // Initialize content store
        let store = InMemoryContentStore::from_json_file(
            &environment.content_fixture_path,
            ContentStoreConfig::with_max_batch_size(environment.max_batch_size),
        )
        .await?;

        // Load datasource configuration
        let config = match &environment.datasource_config_path {
            Some(path) => DatasourceConfig::from_json_file(path).await?,
            None => DatasourceConfig::default(),
        };

        let settings = DatasourceSettings::with_page_size(environment.page_size)?;
        let datasource = Arc::new(ContentEntityDatasource::with_settings(
            Arc::new(store),
            config,
            settings,
        ));

        // Verify the content store is usable
        if !datasource.health_check().await? {
            warn!("Content store reported unhealthy");
            return Err(AppError::config("Content store is unhealthy"));
        }

        info!("Content store connection verified");

        Ok(Self { datasource })
    }
}
