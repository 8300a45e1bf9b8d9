//! Error types for result decoding and normalization.

use thiserror::Error;

/// Errors raised by payload decoding and row extraction.
///
/// Row-level data problems (unbound variables, non-numeric percentages) are
/// not errors; they normalize to absent cells. These variants cover the
/// structural failures that abort a whole render pass.
#[derive(Error, Debug)]
pub enum BindingsError {
    /// The payload is not valid JSON.
    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but not a SELECT result document.
    #[error("malformed SELECT results: {0}")]
    Structure(String),

    /// A column the pipeline requires is not in the declared variable list.
    #[error("required column '{0}' is not declared in the result set")]
    MissingColumn(String),
}

/// Result type for binding operations.
pub type Result<T> = std::result::Result<T, BindingsError>;
