//! Per-column outcome records carried alongside the cleaned table.

use serde::{Deserialize, Serialize};

/// Result of a per-column operation (currency conversion).
///
/// Failures are data, not errors: the pipeline records them and moves on,
/// leaving the affected column untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnOutcome {
    /// The column was converted to numbers.
    ConversionSucceeded {
        column: String,
        /// Non-missing cells that now hold numbers.
        values_converted: usize,
    },
    /// The column could not be converted and was left as-is.
    ConversionFailed { column: String, reason: String },
}

impl ColumnOutcome {
    /// Name of the affected column.
    pub fn column(&self) -> &str {
        match self {
            ColumnOutcome::ConversionSucceeded { column, .. } => column,
            ColumnOutcome::ConversionFailed { column, .. } => column,
        }
    }

    /// True for failure outcomes.
    pub fn is_failure(&self) -> bool {
        matches!(self, ColumnOutcome::ConversionFailed { .. })
    }

    /// Get a human-readable description of the outcome.
    pub fn description(&self) -> String {
        match self {
            ColumnOutcome::ConversionSucceeded {
                column,
                values_converted,
            } => {
                format!(
                    "Column '{}' converted to numbers ({} values)",
                    column, values_converted
                )
            }
            ColumnOutcome::ConversionFailed { column, reason } => {
                format!("Column '{}' could not be converted: {}", column, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_and_accessors() {
        let ok = ColumnOutcome::ConversionSucceeded {
            column: "Venta".to_string(),
            values_converted: 3,
        };
        assert_eq!(ok.column(), "Venta");
        assert!(!ok.is_failure());
        assert!(ok.description().contains("3 values"));

        let failed = ColumnOutcome::ConversionFailed {
            column: "Notas".to_string(),
            reason: "value 'N/A' at row 2 is not numeric".to_string(),
        };
        assert!(failed.is_failure());
        assert!(failed.description().contains("Notas"));
    }
}
