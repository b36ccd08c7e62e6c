//! CSV source for marker records.
//!
//! Reads the marker file row by row and turns each row into a typed
//! [`RawRecord`]. The header is checked once, up front: a file without one of
//! the required columns is rejected before any row is read.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use marker_loader_shared::{MarkerDocument, RawRecord};
use tracing::{info, warn};

use crate::errors::IngestError;

/// Positions of the named columns within a header row.
#[derive(Debug, Clone)]
struct ColumnLayout {
    atlas_number: usize,
    markertext: usize,
    address: usize,
    utm_east: usize,
    utm_north: usize,
    utm_zone: usize,
    /// Header name and position of every other column.
    extra: Vec<(String, usize)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !RawRecord::REQUIRED_COLUMNS.contains(h))
            .filter(|(_, h)| {
                let derived = MarkerDocument::DERIVED_FIELDS.contains(h);
                if derived {
                    warn!(column = %h, "Ignoring source column shadowed by a derived field");
                }
                !derived
            })
            .map(|(i, h)| (h.to_string(), i))
            .collect();

        Ok(Self {
            atlas_number: position("atlas_number")?,
            markertext: position("markertext")?,
            address: position("address")?,
            utm_east: position("utm_east")?,
            utm_north: position("utm_north")?,
            utm_zone: position("utm_zone")?,
            extra,
        })
    }

    fn to_raw_record(&self, record: &StringRecord) -> RawRecord {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        RawRecord {
            atlas_number: field(self.atlas_number),
            markertext: field(self.markertext),
            address: field(self.address),
            utm_east: field(self.utm_east),
            utm_north: field(self.utm_north),
            utm_zone: field(self.utm_zone),
            extra: self
                .extra
                .iter()
                .map(|(name, i)| (name.clone(), field(*i)))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// Streams [`RawRecord`]s out of a CSV file with a header row.
pub struct CsvSource<R: Read> {
    reader: Reader<R>,
    layout: ColumnLayout,
}

impl CsvSource<File> {
    /// Open the CSV file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| IngestError::read(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "Opened marker CSV");
        Self::with_reader(reader)
    }
}

impl<R: Read> CsvSource<R> {
    /// Read CSV data from any reader.
    pub fn from_reader(reader: R) -> Result<Self, IngestError> {
        Self::with_reader(ReaderBuilder::new().has_headers(true).from_reader(reader))
    }

    fn with_reader(mut reader: Reader<R>) -> Result<Self, IngestError> {
        let headers = reader.headers()?.clone();
        let layout = ColumnLayout::from_headers(&headers)?;

        Ok(Self { reader, layout })
    }

    /// Iterate over the remaining rows.
    ///
    /// A malformed row (bad UTF-8, wrong number of fields) yields an error.
    pub fn records(&mut self) -> impl Iterator<Item = Result<RawRecord, IngestError>> + '_ {
        let layout = &self.layout;
        self.reader.records().map(move |result| {
            result
                .map(|record| layout.to_raw_record(&record))
                .map_err(IngestError::from)
        })
    }
}
