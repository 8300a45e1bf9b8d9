//! SPARQL SELECT result decoding and row normalization.
//!
//! This crate turns a SPARQL results JSON payload into the flat, typed rows
//! the rendering pipeline consumes:
//!
//! 1. [`ResultSet::from_json`] decodes `head.vars` + `results.bindings`
//!    into declared variables and per-row term maps.
//! 2. [`RowSet::from_results`] projects each row onto exactly the declared
//!    columns, with an explicit present/absent discriminant per cell.
//! 3. [`extract_records`] derives one [`HazardRecord`] per row, applying the
//!    `"Unknown"` name default and lenient numeric coercion.
//!
//! Row-level oddities (unbound optionals, non-numeric percentages) never
//! error; they become absent cells or `None` values. Only structural
//! problems (malformed payload, missing declared columns) surface as
//! [`BindingsError`].

pub mod error;
pub mod record;
pub mod results;
pub mod row;

pub use error::{BindingsError, Result};
pub use record::{extract_records, ColumnSpec, HazardRecord, UNKNOWN_NAME};
pub use results::{BoundTerm, ResultSet};
pub use row::{FlatRow, RowSet};
