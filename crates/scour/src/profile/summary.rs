//! Before/after metrics derived from the two table values.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// The three headline metrics: derived, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    /// Rows in the loaded table.
    pub original_rows: usize,
    /// Rows after cleaning.
    pub cleaned_rows: usize,
    /// Columns after cleaning.
    pub columns: usize,
}

impl CleanSummary {
    /// Compute the summary from the retained original and the cleaned table.
    pub fn compute(original: &Table, cleaned: &Table) -> Self {
        Self {
            original_rows: original.row_count(),
            cleaned_rows: cleaned.row_count(),
            columns: cleaned.column_count(),
        }
    }

    /// Rows removed by deduplication and filtering.
    pub fn rows_removed(&self) -> usize {
        self.original_rows.saturating_sub(self.cleaned_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    #[test]
    fn test_compute() {
        let original = Table::new(
            vec!["a".to_string()],
            vec![vec![Cell::Int(1)], vec![Cell::Int(1)], vec![Cell::Int(2)]],
        );
        let cleaned = Table::new(
            vec!["a".to_string()],
            vec![vec![Cell::Int(1)], vec![Cell::Int(2)]],
        );
        let summary = CleanSummary::compute(&original, &cleaned);
        assert_eq!(summary.original_rows, 3);
        assert_eq!(summary.cleaned_rows, 2);
        assert_eq!(summary.columns, 1);
        assert_eq!(summary.rows_removed(), 1);
    }
}
