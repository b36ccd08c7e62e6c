//! This module defines the core data structures used across the marker loader.
//! It re-exports `RawRecord`, `MarkerDocument` and `GeoPoint`.

pub mod geo_point;
pub mod marker_document;
pub mod raw_record;

pub use geo_point::GeoPoint;
pub use marker_document::MarkerDocument;
pub use raw_record::RawRecord;
