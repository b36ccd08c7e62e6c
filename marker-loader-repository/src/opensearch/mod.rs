//! OpenSearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! using the OpenSearch client, which speaks the Elasticsearch REST API.

mod index_config;
mod provider;

pub use index_config::{get_index_settings, match_all_query, IndexConfig, DOC_TYPE, INDEX_NAME};
pub use provider::OpenSearchProvider;
