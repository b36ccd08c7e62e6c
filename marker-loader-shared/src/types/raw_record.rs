//! Raw marker record as read from the source CSV file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the historical marker CSV file.
///
/// The columns the loader needs are named fields. Every other column is kept
/// in `extra`, keyed by its header name, so the indexed document still carries
/// the full row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    /// Stable unique identifier of the marker, used as the document ID.
    pub atlas_number: String,
    /// Free text inscription of the marker.
    pub markertext: String,
    pub address: String,
    pub utm_east: String,
    pub utm_north: String,
    pub utm_zone: String,
    /// Remaining columns, in header name order.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl RawRecord {
    /// Names of the columns every source file must provide.
    pub const REQUIRED_COLUMNS: [&'static str; 6] = [
        "atlas_number",
        "markertext",
        "address",
        "utm_east",
        "utm_north",
        "utm_zone",
    ];

    /// Whether the record has a usable identifier.
    pub fn has_atlas_number(&self) -> bool {
        !self.atlas_number.trim().is_empty()
    }
}
