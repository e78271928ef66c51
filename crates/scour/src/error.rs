//! Error types for the Scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Scour operations.
///
/// Only structurally fatal conditions live here: a file that cannot be
/// parsed, a referenced column that does not exist, an invalid
/// configuration. Per-column conversion problems are reported as
/// [`ColumnOutcome`](crate::pipeline::ColumnOutcome) values instead.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed CSV input or output failure).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading a spreadsheet container.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    /// Error writing a spreadsheet container.
    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no columns to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A referenced column does not exist in the table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Renaming produced two columns with the same name.
    #[error("Duplicate column name after rename: '{0}'")]
    DuplicateColumn(String),

    /// Invalid cleaning configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
