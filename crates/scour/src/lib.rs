//! Scour: a cleaning pipeline for messy tabular files.
//!
//! Scour loads a CSV or spreadsheet file into an in-memory [`Table`] of
//! typed cells, applies a fixed-order sequence of cleaning stages
//! (missing-value fill, whitespace normalization, currency-to-number
//! conversion, case normalization, deduplication, renaming, filtering)
//! and exports the result as CSV or xlsx bytes.
//!
//! # Core Principles
//!
//! - **Pure pipeline**: cleaning is a function of (table, config); the
//!   loaded table is never mutated and is kept for before/after metrics
//! - **Failures are data**: a currency column that will not parse is
//!   reported as an outcome, never thrown
//! - **Explicit configuration**: one immutable [`CleanConfig`] value per
//!   run, validated up front
//!
//! # Example
//!
//! ```
//! use scour::{clean, CleanConfig, Loader, SourceKind};
//!
//! let bytes = b"Cliente,Venta\n  juan   perez ,$ 1200\njuan perez,$ 1200\n";
//! let table = Loader::new().load_bytes(bytes, SourceKind::Csv).unwrap();
//!
//! let config = CleanConfig {
//!     dedupe: true,
//!     currency_columns: vec!["Venta".to_string()],
//!     ..CleanConfig::default()
//! };
//! let (cleaned, outcomes) = clean(&table, &config).unwrap();
//!
//! assert_eq!(cleaned.row_count(), 1);
//! assert!(!outcomes[0].is_failure());
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod pipeline;
pub mod profile;
pub mod table;

mod cleaner;

pub use crate::cleaner::{CleanRun, Cleaner};
pub use error::{Result, ScourError};
pub use export::{to_csv_bytes, to_xlsx_bytes};
pub use input::{Loader, LoaderConfig, SourceKind, SourceMetadata};
pub use pipeline::{clean, CaseBuckets, CleanConfig, ColumnOutcome, RowFilter};
pub use profile::{
    bar_chart, chart_columns, describe, ChartColumns, ChartPoint, ChartSpec, CleanSummary,
    NumericSummary,
};
pub use table::{Cell, Table};
