//! Search index provider trait definition.
//!
//! This module defines the abstract interface for the four search index
//! operations the loader needs, so the `IndexManager` and the loader can run
//! against OpenSearch/Elasticsearch or an in-memory fake.

use async_trait::async_trait;
use marker_loader_shared::MarkerDocument;
use serde_json::Value;

use crate::errors::SearchIndexError;

/// Abstracts the underlying search index implementation.
///
/// A provider is bound to a single index (see `IndexConfig`). All methods
/// return `Result<T, SearchIndexError>`; operations on a missing index report
/// `SearchIndexError::IndexNotFound` and leave it to the caller to decide
/// whether that is fatal.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Name of the index this provider writes to.
    fn index_name(&self) -> &str;

    /// Create the index with the given settings and mappings body.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(SearchIndexError)` - If creation fails, including when the index already exists
    async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError>;

    /// Delete the index and all of its documents.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted
    /// * `Err(SearchIndexError::IndexNotFound)` - If there was no index to delete
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_index(&self) -> Result<(), SearchIndexError>;

    /// Delete every document matching `query`, keeping the index and its mapping.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of documents deleted
    /// * `Err(SearchIndexError::IndexNotFound)` - If the index does not exist
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_by_query(&self, query: &Value) -> Result<u64, SearchIndexError>;

    /// Write a document under its `atlas_number`, replacing any document with the same ID.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was stored
    /// * `Err(SearchIndexError)` - If the write fails
    async fn create_document(&self, document: &MarkerDocument) -> Result<(), SearchIndexError>;
}
