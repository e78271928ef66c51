//! Cleaning configuration: the immutable value the caller builds per run.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

/// Case-normalization buckets. A column must appear in at most one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseBuckets {
    /// Columns to convert to UPPERCASE.
    #[serde(default)]
    pub upper: Vec<String>,
    /// Columns to convert to lowercase.
    #[serde(default)]
    pub lower: Vec<String>,
    /// Columns to convert to Title Case.
    #[serde(default)]
    pub title: Vec<String>,
}

impl CaseBuckets {
    /// True when no column is selected in any bucket.
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty() && self.lower.is_empty() && self.title.is_empty()
    }
}

/// Row filter: keep only rows whose cell in `column` displays as one of
/// `allowed`.
///
/// `column` refers to the post-rename name. An empty `allowed` set means
/// the filter is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: String,
    #[serde(default)]
    pub allowed: Vec<String>,
}

/// Configuration for one cleaning run.
///
/// An explicit immutable value supplied by the caller; the pipeline is a
/// pure function of (table, config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Remove rows that are exact duplicates across all columns.
    pub dedupe: bool,
    /// Replace every missing cell with this literal, table-wide.
    pub fill_missing: Option<String>,
    /// Collapse whitespace runs in text cells to single spaces (default on).
    pub trim_whitespace: bool,
    /// Columns whose text values should be parsed as currency amounts.
    pub currency_columns: Vec<String>,
    /// Case-normalization buckets.
    pub case: CaseBuckets,
    /// Column rename mapping (old name → new name), applied in order.
    pub rename: IndexMap<String, String>,
    /// Optional row filter, applied last.
    pub filter: Option<RowFilter>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            dedupe: false,
            fill_missing: None,
            trim_whitespace: true,
            currency_columns: Vec::new(),
            case: CaseBuckets::default(),
            rename: IndexMap::new(),
            filter: None,
        }
    }
}

impl CleanConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CleanConfig = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the declared invariants.
    ///
    /// The three case buckets must be disjoint; this is checked up front
    /// rather than relying on the caller's widget sequencing.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for column in self
            .case
            .upper
            .iter()
            .chain(&self.case.lower)
            .chain(&self.case.title)
        {
            if !seen.insert(column.as_str()) {
                return Err(ScourError::Config(format!(
                    "column '{}' appears in more than one case bucket",
                    column
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trims() {
        let config = CleanConfig::default();
        assert!(config.trim_whitespace);
        assert!(!config.dedupe);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disjoint_buckets_ok() {
        let config = CleanConfig {
            case: CaseBuckets {
                upper: vec!["a".to_string()],
                lower: vec!["b".to_string()],
                title: vec!["c".to_string()],
            },
            ..CleanConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlapping_buckets_rejected() {
        let config = CleanConfig {
            case: CaseBuckets {
                upper: vec!["name".to_string()],
                title: vec!["name".to_string()],
                ..CaseBuckets::default()
            },
            ..CleanConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScourError::Config(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = CleanConfig {
            dedupe: true,
            fill_missing: Some("n/a".to_string()),
            currency_columns: vec!["Venta".to_string()],
            ..CleanConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CleanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CleanConfig = serde_json::from_str(r#"{"dedupe": true}"#).unwrap();
        assert!(config.dedupe);
        assert!(config.trim_whitespace);
        assert!(config.rename.is_empty());
    }
}
