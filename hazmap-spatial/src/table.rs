//! External geometry table.
//!
//! The join path resolves geometry from a side dataset keyed by display
//! name; in the source domain, a shapefile-derived CSV of municipality
//! shapes. The table is loaded fresh for every render pass (no cache) and
//! shared read-only across the pass. Names are expected to be unique; on a
//! duplicate, the first occurrence in table order wins.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, SpatialError};

/// Default column holding the municipality display name.
pub const DEFAULT_NAME_COLUMN: &str = "NAME_IT";

/// Default column holding the WKT geometry.
pub const DEFAULT_WKT_COLUMN: &str = "SHAPE";

/// One table row: display name plus optional WKT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryTableEntry {
    /// Display name, the join key.
    pub name: String,
    /// WKT geometry in the source CRS; `None` when the cell was empty.
    pub wkt: Option<String>,
}

/// Ordered, read-only collection of geometry rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeometryTable {
    entries: Vec<GeometryTableEntry>,
}

impl GeometryTable {
    /// Build a table from already-materialized entries, preserving order.
    pub fn from_entries(entries: Vec<GeometryTableEntry>) -> GeometryTable {
        GeometryTable { entries }
    }

    /// Load a table from a CSV file.
    ///
    /// `name_column` must exist in the header; a row with an empty or
    /// missing geometry cell is kept with `wkt: None` so the join can still
    /// see the name (and count the miss) rather than silently losing rows.
    pub fn from_csv_path(
        path: &Path,
        name_column: &str,
        wkt_column: &str,
    ) -> Result<GeometryTable> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file, name_column, wkt_column)
    }

    /// Load a table from any CSV source.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        name_column: &str,
        wkt_column: &str,
    ) -> Result<GeometryTable> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let name_ix = headers
            .iter()
            .position(|h| h == name_column)
            .ok_or_else(|| {
                SpatialError::Table(format!("missing name column '{name_column}'"))
            })?;
        let wkt_ix = headers.iter().position(|h| h == wkt_column);
        if wkt_ix.is_none() {
            tracing::warn!(
                column = wkt_column,
                "geometry column not found; all rows will join without geometry"
            );
        }

        let mut entries = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let name = record.get(name_ix).unwrap_or_default().to_string();
            let wkt = wkt_ix
                .and_then(|ix| record.get(ix))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            entries.push(GeometryTableEntry { name, wkt });
        }

        Ok(GeometryTable { entries })
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[GeometryTableEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
