//! # Marker Loader
//!
//! Loads historical marker records from a CSV file into the `thc` search index.
//!
//! ## Architecture
//!
//! The loader follows the Source-Processor-Loader pattern:
//!
//! 1. **Source**: Streams typed rows out of the CSV file
//! 2. **Processor**: Enriches each row with years, classifications and a location
//! 3. **Loader**: Prepares the index and writes one document per row
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration, logging and dependency wiring
//! - [`source`]: CSV reader producing `RawRecord`s
//! - [`processor`]: Year extraction, UTM conversion, classification, row transform
//! - [`loader`]: Drives the end-to-end load
//! - [`errors`]: Error types for the ingest

pub mod config;
pub mod errors;
pub mod loader;
pub mod processor;
pub mod source;

pub use config::{Dependencies, LoaderSettings};
pub use errors::IngestError;
pub use loader::{LoadSummary, MarkerLoader};

use thiserror::Error;

/// Errors that can occur during loader initialization or execution.
#[derive(Error, Debug)]
pub enum LoaderAppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),
}

impl LoaderAppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
