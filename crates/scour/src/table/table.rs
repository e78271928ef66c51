//! The in-memory table: ordered columns, ordered rows, typed cells.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Parsed tabular data.
///
/// Rows keep the insertion order of the source file; every row is exactly
/// as wide as `columns`. A table is created once per loaded file and never
/// mutated in place; each pipeline stage produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in source order.
    pub columns: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a new table.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get all cells of a column by index.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&Cell::Missing))
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Whether a column is numeric: at least one number, no text cells.
    ///
    /// Missing cells are ignored, so a converted currency column with gaps
    /// still counts as numeric.
    pub fn is_numeric_column(&self, index: usize) -> bool {
        let mut saw_number = false;
        for cell in self.column_cells(index) {
            match cell {
                Cell::Int(_) | Cell::Float(_) => saw_number = true,
                Cell::Text(_) => return false,
                Cell::Missing => {}
            }
        }
        saw_number
    }

    /// Whether a column holds any text cell.
    pub fn is_text_column(&self, index: usize) -> bool {
        self.column_cells(index).any(Cell::is_text)
    }

    /// Canonical key for a row, for exact-duplicate detection.
    ///
    /// Cells are encoded with a type tag and joined with a separator that
    /// cannot appear in the tags, so distinct rows never collide by
    /// concatenation.
    pub(crate) fn row_key(row: &[Cell]) -> String {
        let mut key = String::new();
        for cell in row {
            cell.encode_key(&mut key);
            key.push('\u{1f}');
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["name".to_string(), "amount".to_string()],
            vec![
                vec![Cell::Text("Alice".to_string()), Cell::Int(10)],
                vec![Cell::Text("Bob".to_string()), Cell::Missing],
                vec![Cell::Text("Carol".to_string()), Cell::Float(2.5)],
            ],
        )
    }

    #[test]
    fn test_counts_and_lookup() {
        let t = sample();
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.column_index("amount"), Some(1));
        assert_eq!(t.column_index("missing"), None);
        assert_eq!(t.get(0, 0), Some(&Cell::Text("Alice".to_string())));
    }

    #[test]
    fn test_column_classification() {
        let t = sample();
        assert!(t.is_text_column(0));
        assert!(!t.is_numeric_column(0));
        // Numbers plus a missing cell still count as numeric.
        assert!(t.is_numeric_column(1));
        assert!(!t.is_text_column(1));
    }

    #[test]
    fn test_row_key_exactness() {
        let a = vec![Cell::Text("ab".to_string()), Cell::Text("c".to_string())];
        let b = vec![Cell::Text("a".to_string()), Cell::Text("bc".to_string())];
        assert_ne!(Table::row_key(&a), Table::row_key(&b));

        let c = vec![Cell::Int(1), Cell::Int(2)];
        let d = vec![Cell::Int(1), Cell::Int(2)];
        assert_eq!(Table::row_key(&c), Table::row_key(&d));
    }
}
