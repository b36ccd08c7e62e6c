//! Index lifecycle management.
//!
//! The `IndexManager` prepares the marker index before a load: either wiping
//! its documents or dropping and recreating it with the geo-point mapping.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::{get_index_settings, match_all_query, DOC_TYPE};

/// What `IndexManager::clear` ended up doing to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPreparation {
    /// The index existed; this many documents were removed and the mapping was kept.
    Cleared { deleted: u64 },
    /// The index was missing and has been created with a fresh mapping.
    Recreated,
}

/// Ensures the destination index exists with the required schema.
///
/// # Example
///
/// ```ignore
/// let manager = IndexManager::new(Arc::new(provider));
/// manager.reset().await?;
/// ```
pub struct IndexManager {
    provider: Arc<dyn SearchIndexProvider>,
    doc_type: String,
}

impl IndexManager {
    /// Create a manager over the given provider using the default document category.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self::with_doc_type(provider, DOC_TYPE)
    }

    /// Create a manager recording a custom document category in the mapping.
    pub fn with_doc_type(provider: Arc<dyn SearchIndexProvider>, doc_type: impl Into<String>) -> Self {
        Self {
            provider,
            doc_type: doc_type.into(),
        }
    }

    /// Drop the index if present, then create it with the marker mapping.
    ///
    /// A missing index is not an error. Any other failure aborts.
    #[instrument(skip(self), fields(index = %self.provider.index_name()))]
    pub async fn reset(&self) -> Result<(), SearchIndexError> {
        match self.provider.delete_index().await {
            Ok(()) => info!("Dropped existing index"),
            Err(e) if e.is_index_not_found() => info!("No existing index to drop"),
            Err(e) => return Err(e),
        }

        self.provider
            .create_index(&get_index_settings(&self.doc_type))
            .await?;

        info!("Index reset with geo_point mapping on location");
        Ok(())
    }

    /// Remove every document from the index, keeping its mapping.
    ///
    /// Falls back to [`IndexManager::reset`] when the index does not exist.
    /// An index that exists but was created without the marker mapping is
    /// left as it is.
    #[instrument(skip(self), fields(index = %self.provider.index_name()))]
    pub async fn clear(&self) -> Result<IndexPreparation, SearchIndexError> {
        match self.provider.delete_by_query(&match_all_query()).await {
            Ok(deleted) => {
                info!(deleted = deleted, "Cleared existing documents");
                Ok(IndexPreparation::Cleared { deleted })
            }
            Err(e) if e.is_index_not_found() => {
                warn!("Index does not exist, creating it");
                self.reset().await?;
                Ok(IndexPreparation::Recreated)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use marker_loader_shared::MarkerDocument;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Records calls and fails the ones it is told to.
    #[derive(Default)]
    struct MockProvider {
        calls: Mutex<Vec<&'static str>>,
        created_with: Mutex<Option<Value>>,
        index_missing: bool,
        fail_delete: bool,
    }

    impl MockProvider {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockProvider {
        fn index_name(&self) -> &str {
            "thc"
        }

        async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError> {
            self.calls.lock().unwrap().push("create_index");
            *self.created_with.lock().unwrap() = Some(settings.clone());
            Ok(())
        }

        async fn delete_index(&self) -> Result<(), SearchIndexError> {
            self.calls.lock().unwrap().push("delete_index");
            if self.fail_delete {
                return Err(SearchIndexError::delete("status 500"));
            }
            if self.index_missing {
                return Err(SearchIndexError::index_not_found("thc"));
            }
            Ok(())
        }

        async fn delete_by_query(&self, _query: &Value) -> Result<u64, SearchIndexError> {
            self.calls.lock().unwrap().push("delete_by_query");
            if self.fail_delete {
                return Err(SearchIndexError::delete("status 500"));
            }
            if self.index_missing {
                return Err(SearchIndexError::index_not_found("thc"));
            }
            Ok(3)
        }

        async fn create_document(&self, _document: &MarkerDocument) -> Result<(), SearchIndexError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reset_on_missing_index_creates_geo_mapping() {
        let provider = Arc::new(MockProvider {
            index_missing: true,
            ..Default::default()
        });
        let manager = IndexManager::new(provider.clone());

        manager.reset().await.unwrap();

        assert_eq!(provider.calls(), vec!["delete_index", "create_index"]);
        let settings = provider.created_with.lock().unwrap().clone().unwrap();
        assert_eq!(
            settings["mappings"]["properties"]["location"]["type"],
            "geo_point"
        );
    }

    #[tokio::test]
    async fn test_reset_propagates_other_delete_failures() {
        let provider = Arc::new(MockProvider {
            fail_delete: true,
            ..Default::default()
        });
        let manager = IndexManager::new(provider.clone());

        let result = manager.reset().await;

        assert!(matches!(result, Err(SearchIndexError::DeleteError(_))));
        assert_eq!(provider.calls(), vec!["delete_index"]);
    }

    #[tokio::test]
    async fn test_clear_existing_index_keeps_mapping() {
        let provider = Arc::new(MockProvider::default());
        let manager = IndexManager::new(provider.clone());

        let outcome = manager.clear().await.unwrap();

        assert_eq!(outcome, IndexPreparation::Cleared { deleted: 3 });
        assert_eq!(provider.calls(), vec!["delete_by_query"]);
    }

    #[tokio::test]
    async fn test_clear_missing_index_falls_back_to_reset() {
        let provider = Arc::new(MockProvider {
            index_missing: true,
            ..Default::default()
        });
        let manager = IndexManager::new(provider.clone());

        let outcome = manager.clear().await.unwrap();

        assert_eq!(outcome, IndexPreparation::Recreated);
        assert_eq!(
            provider.calls(),
            vec!["delete_by_query", "delete_index", "create_index"]
        );
    }

    #[tokio::test]
    async fn test_custom_doc_type_in_mapping() {
        let provider = Arc::new(MockProvider {
            index_missing: true,
            ..Default::default()
        });
        let manager = IndexManager::with_doc_type(provider.clone(), "plaque");

        manager.reset().await.unwrap();

        let settings = provider.created_with.lock().unwrap().clone().unwrap();
        assert_eq!(settings["mappings"]["_meta"]["doc_type"], "plaque");
    }
}
