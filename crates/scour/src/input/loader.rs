//! File loading: CSV (with delimiter detection) and xlsx spreadsheets.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};

use super::source::{SourceKind, SourceMetadata};
use crate::error::{Result, ScourError};
use crate::table::{Cell, Table};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// CSV delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
}

/// Loads tabular files into a [`Table`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file, resolving the kind from its extension.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let kind = SourceKind::from_path(path)?;

        let bytes = fs::read(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = self.load_bytes(&bytes, kind)?;

        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let metadata =
            SourceMetadata::new(file, &bytes, kind, table.row_count(), table.column_count());

        Ok((table, metadata))
    }

    /// Parse raw bytes of the declared kind.
    ///
    /// A parse failure is fatal: no partial table is produced and the
    /// pipeline must not run.
    pub fn load_bytes(&self, bytes: &[u8], kind: SourceKind) -> Result<Table> {
        match kind {
            SourceKind::Csv => self.parse_csv(bytes),
            SourceKind::Spreadsheet => self.parse_spreadsheet(bytes),
        }
    }

    fn parse_csv(&self, bytes: &[u8]) -> Result<Table> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes),
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if columns.is_empty() {
            return Err(ScourError::EmptyData("no columns found".to_string()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            // Ragged rows and invalid UTF-8 surface here as csv errors.
            let record = result?;
            rows.push(record.iter().map(Cell::parse).collect());
        }

        Ok(Table::new(columns, rows))
    }

    fn parse_spreadsheet(&self, bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ScourError::EmptyData("spreadsheet has no sheets".to_string()))??;

        let mut row_iter = range.rows();
        let header = row_iter
            .next()
            .ok_or_else(|| ScourError::EmptyData("no columns found".to_string()))?;

        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, data)| match data {
                Data::Empty => format!("column_{}", i + 1),
                other => other.to_string(),
            })
            .collect();

        let rows: Vec<Vec<Cell>> = row_iter
            .map(|row| row.iter().map(data_to_cell).collect())
            .collect();

        Ok(Table::new(columns, rows))
    }
}

/// Convert a calamine cell into a [`Cell`].
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Missing,
        Data::String(s) => Cell::parse(s),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) if f.is_finite() => Cell::Float(*f),
        Data::Float(_) => Cell::Missing,
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

/// Detect the CSV delimiter from the header line.
///
/// Counts candidate delimiters outside quoted sections and picks the most
/// frequent one; a comma is the fallback when nothing matches.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let first_line = bytes
        .split(|&b| b == b'\n')
        .find(|line| !line.is_empty())
        .unwrap_or(&[]);

    let mut best = b',';
    let mut best_count = 0;
    for &delim in DELIMITERS {
        let mut count = 0;
        let mut in_quotes = false;
        for &b in first_line {
            match b {
                b'"' => in_quotes = !in_quotes,
                b if b == delim && !in_quotes => count += 1,
                _ => {}
            }
        }
        if count > best_count {
            best_count = count;
            best = delim;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter(b"a\tb\tc\n1\t2\t3"), b'\t');
        assert_eq!(detect_delimiter(b"a;b;c\n1;2;3"), b';');
        // Quoted commas do not count.
        assert_eq!(detect_delimiter(b"\"a,b\";c\n"), b';');
        // No delimiter at all falls back to comma.
        assert_eq!(detect_delimiter(b"single\n1\n"), b',');
    }

    #[test]
    fn test_parse_csv_typed_cells() {
        let loader = Loader::new();
        let table = loader
            .load_bytes(b"name,age,score\nAlice,30,1.5\nBob,,\n", SourceKind::Csv)
            .unwrap();

        assert_eq!(table.columns, vec!["name", "age", "score"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some(&Cell::Text("Alice".to_string())));
        assert_eq!(table.get(0, 1), Some(&Cell::Int(30)));
        assert_eq!(table.get(0, 2), Some(&Cell::Float(1.5)));
        assert_eq!(table.get(1, 1), Some(&Cell::Missing));
    }

    #[test]
    fn test_parse_csv_header_only() {
        let loader = Loader::new();
        let table = loader.load_bytes(b"a,b,c\n", SourceKind::Csv).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_csv_ragged_row_is_fatal() {
        let loader = Loader::new();
        let result = loader.load_bytes(b"a,b,c\n1,2\n", SourceKind::Csv);
        assert!(matches!(result, Err(ScourError::Csv(_))));
    }

    #[test]
    fn test_parse_csv_quoted_fields() {
        let loader = Loader::new();
        let table = loader
            .load_bytes(b"name,note\n\"Perez, Juan\",\"said \"\"hi\"\"\"\n", SourceKind::Csv)
            .unwrap();
        assert_eq!(
            table.get(0, 0),
            Some(&Cell::Text("Perez, Juan".to_string()))
        );
        assert_eq!(
            table.get(0, 1),
            Some(&Cell::Text("said \"hi\"".to_string()))
        );
    }

    #[test]
    fn test_parse_spreadsheet_garbage_is_fatal() {
        let loader = Loader::new();
        let result = loader.load_bytes(b"not a zip container", SourceKind::Spreadsheet);
        assert!(matches!(result, Err(ScourError::Spreadsheet(_))));
    }
}
