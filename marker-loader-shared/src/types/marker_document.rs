//! Enriched marker document types for the search index.
//!
//! This module defines the document structure that is written to the index.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::geo_point::GeoPoint;
use crate::types::raw_record::RawRecord;

/// Document representation for the search index.
///
/// A `MarkerDocument` is a [`RawRecord`] plus the fields derived from it.
///
/// # Fields
///
/// - `atlas_number`: Marker identifier, also the document ID
/// - `address`: Whitespace-trimmed address
/// - `years`: 4-digit years found in `markertext`, in order of appearance
/// - `classifications`: Category labels, possibly empty
/// - `location`: Converted UTM reference, omitted when conversion failed
/// - `extra`: Every other source column, flattened into the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerDocument {
    pub atlas_number: String,
    pub markertext: String,
    pub address: String,
    pub utm_east: String,
    pub utm_north: String,
    pub utm_zone: String,
    pub years: Vec<u16>,
    pub classifications: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl MarkerDocument {
    /// Fields derived from the raw record. Source columns with these names are dropped.
    pub const DERIVED_FIELDS: [&'static str; 3] = ["years", "classifications", "location"];

    /// Build a document from a raw record with no derived fields yet.
    ///
    /// The address is trimmed; `years` and `classifications` start empty and
    /// `location` starts absent. Extra columns named like a derived field are
    /// discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use marker_loader_shared::{MarkerDocument, RawRecord};
    ///
    /// let raw = RawRecord {
    ///     atlas_number: "5507012345".to_string(),
    ///     address: "  100 Main St  ".to_string(),
    ///     ..Default::default()
    /// };
    /// let doc = MarkerDocument::from_raw(raw);
    /// assert_eq!(doc.address, "100 Main St");
    /// ```
    pub fn from_raw(raw: RawRecord) -> Self {
        let mut extra = raw.extra;
        extra.retain(|name, _| !Self::DERIVED_FIELDS.contains(&name.as_str()));

        Self {
            address: raw.address.trim().to_string(),
            atlas_number: raw.atlas_number,
            markertext: raw.markertext,
            utm_east: raw.utm_east,
            utm_north: raw.utm_north,
            utm_zone: raw.utm_zone,
            years: Vec::new(),
            classifications: BTreeSet::new(),
            location: None,
            extra,
        }
    }

    /// The ID the document is stored under in the search index.
    pub fn document_id(&self) -> &str {
        &self.atlas_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRecord {
        RawRecord {
            atlas_number: "5507012345".to_string(),
            markertext: "Founded 1836".to_string(),
            address: "\t100 Main St \n".to_string(),
            utm_east: "500000".to_string(),
            utm_north: "4649776".to_string(),
            utm_zone: "14".to_string(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_from_raw_trims_address_only() {
        let doc = MarkerDocument::from_raw(raw());

        assert_eq!(doc.atlas_number, "5507012345");
        assert_eq!(doc.address, "100 Main St");
        assert_eq!(doc.markertext, "Founded 1836");
        assert!(doc.years.is_empty());
        assert!(doc.classifications.is_empty());
        assert!(doc.location.is_none());
    }

    #[test]
    fn test_derived_fields_win_over_extra_columns() {
        let mut raw = raw();
        raw.extra
            .insert("location".to_string(), "(30.27, -97.74)".to_string());
        raw.extra.insert("years".to_string(), "n/a".to_string());
        raw.extra
            .insert("county".to_string(), "Travis".to_string());

        let mut doc = MarkerDocument::from_raw(raw);
        doc.location = Some(GeoPoint::new(42.0, -99.0));
        doc.years = vec![1836];

        assert_eq!(doc.extra.len(), 1);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["location"], serde_json::json!({ "lat": 42.0, "lon": -99.0 }));
        assert_eq!(json["years"], serde_json::json!([1836]));
        assert_eq!(json["county"], "Travis");
    }

    #[test]
    fn test_document_id() {
        let doc = MarkerDocument::from_raw(raw());
        assert_eq!(doc.document_id(), "5507012345");
    }

    #[test]
    fn test_serialization_omits_missing_location() {
        let doc = MarkerDocument::from_raw(raw());
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json.get("location").is_none());
        assert_eq!(json["years"], serde_json::json!([]));
        assert_eq!(json["classifications"], serde_json::json!([]));
    }

    #[test]
    fn test_serialization_with_location_and_extra() {
        let mut raw = raw();
        raw.extra
            .insert("county".to_string(), "Travis".to_string());
        let mut doc = MarkerDocument::from_raw(raw);
        doc.location = Some(GeoPoint::new(42.0, -99.0));
        doc.years = vec![1836];

        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: MarkerDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, doc);
        assert_eq!(deserialized.extra.get("county").map(String::as_str), Some("Travis"));
    }
}
