//! Processor module for the marker loader.
//!
//! Enriches raw CSV rows into marker documents.

mod classifier;
mod coordinates;
mod marker_processor;
mod years;

pub use classifier::{Classifier, EraRule, RuleClassifier, SubjectRule};
pub use coordinates::{utm_to_geo_point, CoordinateError, UtmCoordinate};
pub use marker_processor::MarkerProcessor;
pub use years::find_years;
