//! Source kinds and metadata for loaded files.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, ScourError};

/// Declared kind of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Delimited text (comma, semicolon, tab or pipe separated).
    Csv,
    /// An xlsx/xlsm spreadsheet container.
    Spreadsheet,
}

impl SourceKind {
    /// Resolve the kind from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "tsv" => Ok(SourceKind::Csv),
            "xlsx" | "xlsm" => Ok(SourceKind::Spreadsheet),
            other => Err(ScourError::UnsupportedFormat(format!(
                "'{}' (expected csv, tsv, xlsx or xlsm)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Csv => write!(f, "csv"),
            SourceKind::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path ("<memory>" for byte-buffer loads).
    pub file: String,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Declared source kind.
    pub kind: SourceKind,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for loaded bytes.
    pub fn new(
        file: impl Into<String>,
        bytes: &[u8],
        kind: SourceKind,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file: file.into(),
            hash,
            size_bytes: bytes.len() as u64,
            kind,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(SourceKind::from_path("data.csv").unwrap(), SourceKind::Csv);
        assert_eq!(SourceKind::from_path("data.TSV").unwrap(), SourceKind::Csv);
        assert_eq!(
            SourceKind::from_path("book.xlsx").unwrap(),
            SourceKind::Spreadsheet
        );
        assert!(SourceKind::from_path("notes.txt").is_err());
        assert!(SourceKind::from_path("no_extension").is_err());
    }

    #[test]
    fn test_metadata_hashes_content() {
        let meta = SourceMetadata::new("a.csv", b"a,b\n1,2\n", SourceKind::Csv, 1, 2);
        assert!(meta.hash.starts_with("sha256:"));
        assert_eq!(meta.size_bytes, 8);
        assert_eq!(meta.row_count, 1);
    }
}
