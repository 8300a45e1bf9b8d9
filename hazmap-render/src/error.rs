//! Error types for the render pipeline.

use thiserror::Error;

/// Terminal failures of a render pass.
///
/// Per-row problems never appear here; they are counted in
/// [`crate::RenderStats`] instead.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Result decoding or column extraction failed structurally.
    #[error(transparent)]
    Bindings(#[from] hazmap_bindings::BindingsError),

    /// Geometry-layer structural failure (CRS misconfiguration, table).
    #[error(transparent)]
    Spatial(#[from] hazmap_spatial::SpatialError),

    /// The result set has no rows at all.
    #[error("result set is empty; nothing to render")]
    EmptyResults,
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
