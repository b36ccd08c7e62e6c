//! # Marker Loader Shared
//!
//! This crate defines the record types shared across the marker loader crates:
//! the raw CSV row, the enriched document written to the search index, and the
//! geographic point attached to it.

pub mod types;

pub use types::geo_point::GeoPoint;
pub use types::marker_document::MarkerDocument;
pub use types::raw_record::RawRecord;
