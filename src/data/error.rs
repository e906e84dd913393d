//! Typed errors for the data layer.

use thiserror::Error;

/// Rejected year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("inverted year range: {min} > {max}")]
    Inverted { min: i32, max: i32 },
}

/// Structural problems with an input table. These are contract violations
/// of the data source, not missing-data conditions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing '{column}' column")]
    MissingYearColumn { column: &'static str },

    #[error("row {row}: year value '{value}' is not an integer")]
    InvalidYear { row: usize, value: String },

    #[error("no data file for '{stem}' in {dir}")]
    NotFound { stem: String, dir: String },
}
