//! Cell values: the tagged union stored at every (row, column) position.

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Columns may hold mixed types before cleaning; the pipeline matches
/// exhaustively on the variant rather than guessing from strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Free text.
    Text(String),
    /// Whole number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Absent value.
    Missing,
}

impl Cell {
    /// Parse a raw field into a typed cell.
    ///
    /// An empty (or all-whitespace) field is `Missing`. Integer and finite
    /// float literals become numbers; everything else stays text with its
    /// original spelling.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            // "nan"/"inf" parse as f64 but are not tabular numbers.
            if f.is_finite() {
                return Cell::Float(f);
            }
        }
        Cell::Text(raw.to_string())
    }

    /// Returns true if this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns true if this cell holds a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// Returns true if this cell holds text.
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Text(_) | Cell::Missing => None,
        }
    }

    /// Text view of the cell, if it holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form used for previews, filtering and CSV export.
    ///
    /// Missing renders as the empty string.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Missing => String::new(),
        }
    }

    /// Append a canonical, type-tagged encoding of this cell to `key`.
    ///
    /// Used to build row keys for duplicate detection: two cells encode
    /// equally iff they are value-wise equal, including type. Floats are
    /// encoded by bit pattern so the key never loses precision.
    pub(crate) fn encode_key(&self, key: &mut String) {
        match self {
            Cell::Text(s) => {
                key.push('t');
                key.push_str(s);
            }
            Cell::Int(i) => {
                key.push('i');
                key.push_str(&i.to_string());
            }
            Cell::Float(f) => {
                // Normalize the zero sign so -0.0 and 0.0 compare equal,
                // matching value equality.
                let f = if *f == 0.0 { 0.0 } else { *f };
                key.push('f');
                key.push_str(&f.to_bits().to_string());
            }
            Cell::Missing => key.push('m'),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_missing() {
        assert_eq!(Cell::parse(""), Cell::Missing);
        assert_eq!(Cell::parse("   "), Cell::Missing);
        assert_eq!(Cell::parse("\t"), Cell::Missing);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(Cell::parse("42"), Cell::Int(42));
        assert_eq!(Cell::parse("-7"), Cell::Int(-7));
        assert_eq!(Cell::parse(" 30 "), Cell::Int(30));
        assert_eq!(Cell::parse("3.14"), Cell::Float(3.14));
        assert_eq!(Cell::parse("1200.00"), Cell::Float(1200.0));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(Cell::parse("Alice"), Cell::Text("Alice".to_string()));
        assert_eq!(
            Cell::parse("$ 1,200.00"),
            Cell::Text("$ 1,200.00".to_string())
        );
        // Original spelling is preserved, including surrounding whitespace.
        assert_eq!(Cell::parse("  juan  "), Cell::Text("  juan  ".to_string()));
    }

    #[test]
    fn test_parse_nan_and_inf_stay_text() {
        assert_eq!(Cell::parse("nan"), Cell::Text("nan".to_string()));
        assert_eq!(Cell::parse("inf"), Cell::Text("inf".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Text("a b".to_string()).display(), "a b");
        assert_eq!(Cell::Int(5).display(), "5");
        assert_eq!(Cell::Float(1200.0).display(), "1200");
        assert_eq!(Cell::Float(2.5).display(), "2.5");
        assert_eq!(Cell::Missing.display(), "");
    }

    #[test]
    fn test_encode_key_distinguishes_types() {
        let mut a = String::new();
        let mut b = String::new();
        Cell::Int(1).encode_key(&mut a);
        Cell::Text("1".to_string()).encode_key(&mut b);
        assert_ne!(a, b);
    }
}
