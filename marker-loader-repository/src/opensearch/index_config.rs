//! Index configuration and mappings.
//!
//! This module defines the index name, settings and mappings for the marker index.

use serde_json::{json, Value};

/// The name of the marker index.
pub const INDEX_NAME: &str = "thc";

/// Category label of the documents stored in the index.
pub const DOC_TYPE: &str = "marker";

/// Configuration for the search index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// The index name used for all operations.
    pub name: String,
    /// Category label recorded in the index mapping metadata.
    pub doc_type: String,
}

impl IndexConfig {
    /// Create a new index configuration.
    pub fn new(name: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_type: doc_type.into(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(INDEX_NAME, DOC_TYPE)
    }
}

/// Get the index settings and mappings for the marker index.
///
/// `location` is declared as `geo_point` so geo queries work. The derived
/// fields get explicit types; every other CSV column is left to dynamic mapping.
pub fn get_index_settings(doc_type: &str) -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "_meta": {
                "doc_type": doc_type
            },
            "properties": {
                "atlas_number": {
                    "type": "keyword"
                },
                "markertext": {
                    "type": "text"
                },
                "address": {
                    "type": "text",
                    "fields": {
                        "raw": {
                            "type": "keyword"
                        }
                    }
                },
                "years": {
                    "type": "integer"
                },
                "classifications": {
                    "type": "keyword"
                },
                "location": {
                    "type": "geo_point"
                }
            }
        }
    })
}

/// Query body matching every document in the index.
pub fn match_all_query() -> Value {
    json!({
        "query": {
            "match_all": {}
        }
    })
}
