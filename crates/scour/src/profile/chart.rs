//! Chart spec for the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};
use crate::table::Table;

/// Column candidates for the two chart axes.
///
/// A chart is available when both lists are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartColumns {
    /// Text columns usable as the X axis.
    pub categorical: Vec<String>,
    /// Numeric columns usable as the Y axis.
    pub numeric: Vec<String>,
}

impl ChartColumns {
    /// Whether a chart can be drawn at all.
    pub fn chart_available(&self) -> bool {
        !self.categorical.is_empty() && !self.numeric.is_empty()
    }
}

/// One bar: a category label and its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A two-axis bar chart over the cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<ChartPoint>,
}

/// Classify columns into chart axis candidates.
pub fn chart_columns(table: &Table) -> ChartColumns {
    let mut categorical = Vec::new();
    let mut numeric = Vec::new();
    for (idx, column) in table.columns.iter().enumerate() {
        if table.is_numeric_column(idx) {
            numeric.push(column.clone());
        } else if table.is_text_column(idx) {
            categorical.push(column.clone());
        }
    }
    ChartColumns {
        categorical,
        numeric,
    }
}

/// Build a bar chart spec: one point per row with a numeric Y value.
///
/// Rows whose Y cell is missing or non-numeric are skipped.
pub fn bar_chart(table: &Table, x_column: &str, y_column: &str) -> Result<ChartSpec> {
    let x_idx = table
        .column_index(x_column)
        .ok_or_else(|| ScourError::UnknownColumn(x_column.to_string()))?;
    let y_idx = table
        .column_index(y_column)
        .ok_or_else(|| ScourError::UnknownColumn(y_column.to_string()))?;

    let points = table
        .rows
        .iter()
        .filter_map(|row| {
            let value = row[y_idx].as_f64()?;
            Some(ChartPoint {
                label: row[x_idx].display(),
                value,
            })
        })
        .collect();

    Ok(ChartSpec {
        x_column: x_column.to_string(),
        y_column: y_column.to_string(),
        points,
    })
}
