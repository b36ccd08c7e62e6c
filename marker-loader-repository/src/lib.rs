//! # Marker Loader Repository
//!
//! This crate provides the trait and implementations for interacting with the
//! marker search index. It includes definitions for errors, the provider
//! interface, a concrete implementation for OpenSearch, and the
//! [`IndexManager`] that prepares the index before a load.

pub mod errors;
pub mod interfaces;
pub mod manager;
pub mod opensearch;

pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use manager::{IndexManager, IndexPreparation};
pub use opensearch::{IndexConfig, OpenSearchProvider};
