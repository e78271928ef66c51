//! Main Cleaner facade and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export;
use crate::input::{Loader, SourceKind, SourceMetadata};
use crate::pipeline::{clean, CleanConfig, ColumnOutcome};
use crate::profile::CleanSummary;
use crate::table::Table;

/// One-call entry point: load a file, run the pipeline, bundle the result.
pub struct Cleaner {
    loader: Loader,
    config: CleanConfig,
}

/// Result of one cleaning run.
///
/// The loaded table is retained unmodified alongside the cleaned one so
/// callers can report before/after metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanRun {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The table as loaded.
    pub original: Table,
    /// The table after the pipeline.
    pub cleaned: Table,
    /// Per-column outcome log.
    pub outcomes: Vec<ColumnOutcome>,
    /// Headline metrics.
    pub summary: CleanSummary,
}

impl CleanRun {
    /// Serialize the cleaned table to CSV bytes.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        export::to_csv_bytes(&self.cleaned)
    }

    /// Serialize the cleaned table to xlsx bytes.
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        export::to_xlsx_bytes(&self.cleaned)
    }
}

impl Cleaner {
    /// Create a cleaner with the given pipeline configuration.
    pub fn new(config: CleanConfig) -> Self {
        Self {
            loader: Loader::new(),
            config,
        }
    }

    /// Use a custom loader (e.g. a forced CSV delimiter).
    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = loader;
        self
    }

    /// Load a file (kind resolved from its extension) and clean it.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<CleanRun> {
        let (original, source) = self.loader.load_path(path)?;
        self.run_loaded(original, source)
    }

    /// Clean an in-memory byte buffer of the declared kind.
    pub fn run_bytes(&self, bytes: &[u8], kind: SourceKind) -> Result<CleanRun> {
        let original = self.loader.load_bytes(bytes, kind)?;
        let source = SourceMetadata::new(
            "<memory>",
            bytes,
            kind,
            original.row_count(),
            original.column_count(),
        );
        self.run_loaded(original, source)
    }

    fn run_loaded(&self, original: Table, source: SourceMetadata) -> Result<CleanRun> {
        let (cleaned, outcomes) = clean(&original, &self.config)?;
        let summary = CleanSummary::compute(&original, &cleaned);
        Ok(CleanRun {
            source,
            original,
            cleaned,
            outcomes,
            summary,
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_run_path() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"name,amount\na,1\na,1\nb,2\n").unwrap();

        let cleaner = Cleaner::new(CleanConfig {
            dedupe: true,
            ..CleanConfig::default()
        });
        let run = cleaner.run_path(file.path()).unwrap();

        assert_eq!(run.summary.original_rows, 3);
        assert_eq!(run.summary.cleaned_rows, 2);
        assert_eq!(run.source.kind, SourceKind::Csv);
        assert_eq!(run.original.row_count(), 3);
    }

    #[test]
    fn test_run_bytes_export() {
        let cleaner = Cleaner::default();
        let run = cleaner
            .run_bytes(b"a,b\n1,x\n", SourceKind::Csv)
            .unwrap();
        let csv = String::from_utf8(run.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv, "a,b\n1,x\n");
        assert_eq!(run.source.file, "<memory>");
    }
}
