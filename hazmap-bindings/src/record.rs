//! Hazard records derived from normalized rows.

use serde::{Deserialize, Serialize};

use crate::error::{BindingsError, Result};
use crate::row::RowSet;

/// Display name used when a row has no bound name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Column names the pipeline reads from the result set.
///
/// Defaults match the hazard queries' projection: the municipality IRI, its
/// Italian display name, the exposure percentage, and (direct path only)
/// the WKT geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Subject identifier column (an IRI).
    pub subject: String,
    /// Display name column; join key for the table path.
    pub name: String,
    /// Hazard percentage column.
    pub pct: String,
    /// WKT geometry column, used only by the direct path.
    pub wkt: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            subject: "municipality".into(),
            name: "name_it".into(),
            pct: "hazardPct".into(),
            wkt: "wkt".into(),
        }
    }
}

/// One municipality metric row: identifier, display name, exposure.
///
/// Immutable once built; geometry is resolved separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    /// Subject IRI from the query.
    pub subject: String,
    /// Display name, `"Unknown"` when the row had none.
    pub name: String,
    /// Exposure percentage; `None` when absent or non-numeric.
    pub hazard_pct: Option<f64>,
}

/// Lenient percentage coercion.
///
/// Absent cells, non-numeric text, and non-finite parses all yield `None`;
/// this must never abort processing of other rows.
pub fn coerce_pct(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Derive one [`HazardRecord`] per row.
///
/// The subject, name, and percentage columns must be declared in the result
/// set (row-level absence stays legal); a missing declaration is the
/// structural error the whole render reports.
pub fn extract_records(rows: &RowSet, spec: &ColumnSpec) -> Result<Vec<HazardRecord>> {
    let subject_ix = rows
        .index_of(&spec.subject)
        .ok_or_else(|| BindingsError::MissingColumn(spec.subject.clone()))?;
    let name_ix = rows
        .index_of(&spec.name)
        .ok_or_else(|| BindingsError::MissingColumn(spec.name.clone()))?;
    let pct_ix = rows
        .index_of(&spec.pct)
        .ok_or_else(|| BindingsError::MissingColumn(spec.pct.clone()))?;

    Ok(rows
        .rows()
        .iter()
        .map(|row| HazardRecord {
            subject: row.cell(subject_ix).unwrap_or_default().to_string(),
            name: row
                .cell(name_ix)
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            hazard_pct: coerce_pct(row.cell(pct_ix)),
        })
        .collect())
}
