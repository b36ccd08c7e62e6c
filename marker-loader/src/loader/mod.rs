//! Loader module for the marker loader.
//!
//! Prepares the index, then enriches and writes every marker record, one at a time.

use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::IngestError;
use crate::processor::MarkerProcessor;
use marker_loader_repository::{IndexManager, IndexPreparation, SearchIndexProvider};
use marker_loader_shared::RawRecord;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: usize = 100;

/// Counters reported at the end of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows read from the source.
    pub rows_read: usize,
    /// Documents written to the index.
    pub documents_written: usize,
    /// Rows skipped because they had no `atlas_number`.
    pub rows_rejected: usize,
    /// Written documents that carry no location.
    pub rows_without_location: usize,
}

/// Loader that indexes marker records into the search engine.
///
/// The loader is responsible for:
/// - Clearing the index (or creating it on first run) before writing
/// - Enriching each raw record through the `MarkerProcessor`
/// - Writing each document under its `atlas_number`
pub struct MarkerLoader {
    provider: Arc<dyn SearchIndexProvider>,
    index_manager: IndexManager,
    processor: MarkerProcessor,
}

impl MarkerLoader {
    /// Create a new loader with the given provider and the default processor.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self::with_processor(provider, MarkerProcessor::new())
    }

    /// Create a new loader with a custom processor.
    pub fn with_processor(provider: Arc<dyn SearchIndexProvider>, processor: MarkerProcessor) -> Self {
        Self {
            index_manager: IndexManager::new(provider.clone()),
            provider,
            processor,
        }
    }

    /// Run a full load: clear the index, then write every record.
    ///
    /// Rows are processed strictly in order and each write completes before
    /// the next row is read. The first source or write error aborts the run.
    #[instrument(skip(self, records), fields(index = %self.provider.index_name()))]
    pub async fn run<I>(&self, records: I) -> Result<LoadSummary, IngestError>
    where
        I: IntoIterator<Item = Result<RawRecord, IngestError>>,
    {
        match self.index_manager.clear().await? {
            IndexPreparation::Cleared { deleted } => {
                info!(deleted = deleted, "Index cleared before load")
            }
            IndexPreparation::Recreated => info!("Index created before load"),
        }

        let mut summary = LoadSummary::default();

        for record in records {
            let raw = record?;
            summary.rows_read += 1;

            if summary.rows_read % PROGRESS_INTERVAL == 0 {
                info!(
                    rows_read = summary.rows_read,
                    documents_written = summary.documents_written,
                    "Load progress"
                );
            }

            if !raw.has_atlas_number() {
                warn!(row = summary.rows_read, "Skipping marker without atlas_number");
                summary.rows_rejected += 1;
                continue;
            }

            let doc = self.processor.process(raw);
            if doc.location.is_none() {
                summary.rows_without_location += 1;
            }

            if let Err(e) = self.provider.create_document(&doc).await {
                error!(atlas_number = %doc.atlas_number, error = %e, "Failed to write marker");
                return Err(IngestError::write(doc.atlas_number, e));
            }
            summary.documents_written += 1;
            debug!(atlas_number = %doc.atlas_number, years = ?doc.years, "Marker written");
        }

        info!(
            rows_read = summary.rows_read,
            documents_written = summary.documents_written,
            rows_rejected = summary.rows_rejected,
            rows_without_location = summary.rows_without_location,
            "Load complete"
        );
        Ok(summary)
    }
}
