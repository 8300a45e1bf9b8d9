//! Error types for geometry handling.

use thiserror::Error;

/// Spatial errors.
///
/// Per-row geometry problems never surface here; malformed WKT degrades to
/// [`crate::Geometry::Unsupported`]. These variants are the structural
/// failures that abort a render pass.
#[derive(Error, Debug)]
pub enum SpatialError {
    /// WKT parsing error (internal; callers see `Geometry::Unsupported`).
    #[error("WKT parse error: {0}")]
    WktParse(String),

    /// Projection definition or transform error.
    #[error("projection error: {0}")]
    Projection(String),

    /// Geometry table structure error (e.g. missing column).
    #[error("geometry table error: {0}")]
    Table(String),

    /// IO error while reading a table file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for spatial operations.
pub type Result<T> = std::result::Result<T, SpatialError>;
