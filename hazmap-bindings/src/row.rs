//! Flat row normalization.
//!
//! Projects decoded solution rows onto exactly the declared column set.
//! Each cell is `Some(value)` or `None`; there is no other state. The
//! projection is pure and order-preserving, so normalizing the same result
//! set twice yields identical rows.

use crate::results::ResultSet;

/// A normalized row: one cell per declared column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<Option<String>>,
}

impl FlatRow {
    /// Cell at the given column index, `None` for absent or out of range.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// All cells in column order.
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

/// Normalized rows with their declared column list.
///
/// Column lookup is by name (the declared variable), mirroring how the
/// source query addresses its projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    columns: Vec<String>,
    rows: Vec<FlatRow>,
}

impl RowSet {
    /// Normalize a decoded result set.
    ///
    /// A variable bound in a row yields its lexical value; a missing key
    /// yields an absent cell. Rows keep their payload order.
    pub fn from_results(results: &ResultSet) -> RowSet {
        let rows = results
            .bindings
            .iter()
            .map(|solution| FlatRow {
                cells: results
                    .variables
                    .iter()
                    .map(|var| solution.get(var).map(|term| term.value().to_string()))
                    .collect(),
            })
            .collect();

        RowSet {
            columns: results.variables.clone(),
            rows,
        }
    }

    /// Declared columns, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Normalized rows, in payload order.
    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
