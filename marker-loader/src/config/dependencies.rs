//! Dependency initialization and wiring for the marker loader.

use std::sync::Arc;
use tracing::info;

use crate::config::LoaderSettings;
use crate::loader::MarkerLoader;
use crate::LoaderAppError;
use marker_loader_repository::opensearch::IndexConfig;
use marker_loader_repository::{IndexManager, OpenSearchProvider, SearchIndexProvider};

/// Container for the initialized search index client.
pub struct Dependencies {
    provider: Arc<dyn SearchIndexProvider>,
}

impl Dependencies {
    /// Connect the search index client described by `settings`.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(LoaderAppError)` - If the node URL is unusable
    pub async fn new(settings: &LoaderSettings) -> Result<Self, LoaderAppError> {
        let provider = OpenSearchProvider::new(&settings.url, IndexConfig::default())
            .await
            .map_err(|e| {
                LoaderAppError::config(format!("Failed to create search index client: {}", e))
            })?;

        info!(url = %settings.url, "Search index client ready");

        Ok(Self::from_provider(Arc::new(provider)))
    }

    /// Wrap an already constructed provider.
    pub fn from_provider(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// Loader writing through the configured provider.
    pub fn loader(&self) -> MarkerLoader {
        MarkerLoader::new(self.provider.clone())
    }

    /// Index manager over the configured provider.
    pub fn index_manager(&self) -> IndexManager {
        IndexManager::new(self.provider.clone())
    }
}
