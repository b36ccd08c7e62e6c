//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate against an OpenSearch or Elasticsearch node.

use async_trait::async_trait;
use marker_loader_shared::MarkerDocument;
use opensearch::{
    http::{
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
    },
    indices::{IndicesCreateParts, IndicesDeleteParts},
    DeleteByQueryParts, IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::IndexConfig;

/// OpenSearch provider implementation.
///
/// # Example
///
/// ```ignore
/// use marker_loader_repository::opensearch::IndexConfig;
/// let provider = OpenSearchProvider::new("http://localhost:9200", IndexConfig::default()).await?;
/// provider.create_document(&document).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The server URL (e.g., "http://localhost:9200")
    /// * `index_config` - The index name and document category
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If connection setup fails
    pub async fn new(url: &str, index_config: IndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %index_config.name,
            doc_type = %index_config.doc_type,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index_config,
        })
    }

    /// Read the body of a failed response for error reporting.
    async fn error_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }

    /// Pull the `deleted` count out of a delete-by-query response body.
    fn deleted_count(body: &Value) -> Result<u64, SearchIndexError> {
        body.get("deleted")
            .and_then(Value::as_u64)
            .ok_or_else(|| SearchIndexError::parse(format!("missing 'deleted' in {}", body)))
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    fn index_name(&self) -> &str {
        &self.index_config.name
    }

    async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError> {
        let index = self.index_config.name.as_str();

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(settings.clone())
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "Create index '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        info!(index = %index, "Index created");
        Ok(())
    }

    async fn delete_index(&self) -> Result<(), SearchIndexError> {
        let index = self.index_config.name.as_str();

        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            debug!(index = %index, "Index to delete does not exist");
            return Err(SearchIndexError::index_not_found(index));
        }
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(SearchIndexError::delete(format!(
                "Delete index '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        info!(index = %index, "Index deleted");
        Ok(())
    }

    async fn delete_by_query(&self, query: &Value) -> Result<u64, SearchIndexError> {
        let index = self.index_config.name.as_str();

        let response = self
            .client
            .delete_by_query(DeleteByQueryParts::Index(&[index]))
            .refresh(true)
            .body(query.clone())
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            debug!(index = %index, "Index to clear does not exist");
            return Err(SearchIndexError::index_not_found(index));
        }
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Delete by query request failed");
            return Err(SearchIndexError::delete(format!(
                "Delete by query on '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;
        let deleted = Self::deleted_count(&body)?;

        info!(index = %index, deleted = deleted, "Index cleared");
        Ok(deleted)
    }

    async fn create_document(&self, document: &MarkerDocument) -> Result<(), SearchIndexError> {
        let doc_id = document.document_id();
        if doc_id.trim().is_empty() {
            return Err(SearchIndexError::validation(
                "atlas_number is required to write a document",
            ));
        }

        let body = serde_json::to_value(document)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        // The index API creates the document or replaces the one with the same ID.
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index_config.name, doc_id))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, doc_id = %doc_id, "Index request failed");
            return Err(SearchIndexError::index(format!(
                "Index of document '{}' failed with status {}: {}",
                doc_id, status, error_body
            )));
        }

        debug!(doc_id = %doc_id, "Document written");
        Ok(())
    }
}
