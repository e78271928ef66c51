//! Descriptive statistics per numeric column.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    /// Non-missing numeric values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; absent when fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute descriptive statistics for every numeric column.
///
/// Missing cells are ignored; columns with any text cell are skipped.
pub fn describe(table: &Table) -> Vec<NumericSummary> {
    let mut summaries = Vec::new();

    for (idx, column) in table.columns.iter().enumerate() {
        if !table.is_numeric_column(idx) {
            continue;
        }

        let mut values: Vec<f64> = table
            .column_cells(idx)
            .filter_map(|cell| cell.as_f64())
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        summaries.push(NumericSummary {
            column: column.clone(),
            count,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values[count - 1],
        });
    }

    summaries
}

/// Quantile of a sorted slice with linear interpolation between ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
