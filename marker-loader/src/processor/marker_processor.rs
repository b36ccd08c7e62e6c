//! Marker processor implementation.
//!
//! Transforms raw CSV rows into MarkerDocument structures for indexing.

use tracing::{debug, warn};

use crate::processor::classifier::{Classifier, RuleClassifier};
use crate::processor::coordinates::utm_to_geo_point;
use crate::processor::years::find_years;
use marker_loader_shared::{MarkerDocument, RawRecord};

/// Processor that enriches raw marker rows into search documents.
///
/// The processor is responsible for:
/// - Trimming the address
/// - Extracting years from the marker text and classifying the marker
/// - Converting the UTM grid reference into a location, when it is valid
pub struct MarkerProcessor {
    classifier: Box<dyn Classifier>,
}

impl MarkerProcessor {
    /// Create a processor using the default rule-based classifier.
    pub fn new() -> Self {
        Self::with_classifier(Box::new(RuleClassifier::default()))
    }

    /// Create a processor with a custom classifier.
    pub fn with_classifier(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Enrich a single raw record.
    ///
    /// Never fails: an invalid grid reference only leaves `location` unset.
    pub fn process(&self, raw: RawRecord) -> MarkerDocument {
        for column in MarkerDocument::DERIVED_FIELDS {
            if raw.extra.contains_key(column) {
                warn!(
                    atlas_number = %raw.atlas_number,
                    column = column,
                    "Dropping source column shadowed by a derived field"
                );
            }
        }

        let mut doc = MarkerDocument::from_raw(raw);

        doc.years = find_years(Some(&doc.markertext));
        doc.classifications = self
            .classifier
            .classify(&doc.years, Some(&doc.markertext));

        match utm_to_geo_point(&doc.utm_east, &doc.utm_north, &doc.utm_zone) {
            Ok(point) => doc.location = Some(point),
            Err(e) => debug!(
                atlas_number = %doc.atlas_number,
                reason = %e,
                "No location for marker"
            ),
        }

        doc
    }
}

impl Default for MarkerProcessor {
    fn default() -> Self {
        Self::new()
    }
}
