//! Error types for the marker loader ingest.

use marker_loader_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while loading markers.
///
/// Every variant is fatal for the run.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The CSV source could not be opened or a row could not be parsed.
    #[error("Source error: {0}")]
    SourceError(String),

    /// The CSV header lacks a column the loader requires.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// Preparing the index failed.
    #[error("Index error: {0}")]
    IndexError(#[from] SearchIndexError),

    /// Writing a single document failed.
    #[error("Failed to write marker {atlas_number}: {source}")]
    WriteError {
        atlas_number: String,
        source: SearchIndexError,
    },
}

impl IngestError {
    /// Create a source error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::SourceError(msg.into())
    }

    /// Create a write error for the given marker.
    pub fn write(atlas_number: impl Into<String>, source: SearchIndexError) -> Self {
        Self::WriteError {
            atlas_number: atlas_number.into(),
            source,
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::SourceError(err.to_string())
    }
}
