//! The transformation pipeline: fixed-order stages over an immutable table.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::{CaseBuckets, CleanConfig, RowFilter};
use super::outcome::ColumnOutcome;
use crate::error::{Result, ScourError};
use crate::table::{Cell, Table};

/// Everything that is not a digit, dot, comma or minus sign gets stripped
/// before a currency value is parsed.
static CURRENCY_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.,\-]").expect("valid pattern"));

/// Run the cleaning pipeline.
///
/// Applies the fixed stage order (fill, trim, currency conversion, case
/// normalization, deduplication, rename, filter) and returns the cleaned
/// table plus the per-column outcome log. The input table is never
/// modified; callers keep it around for before/after metrics.
///
/// Business-rule violations (an unparseable currency column) become
/// outcomes. Only structural problems return an error: an invalid config,
/// a referenced column that does not exist, a rename that collides.
pub fn clean(table: &Table, config: &CleanConfig) -> Result<(Table, Vec<ColumnOutcome>)> {
    config.validate()?;
    if table.column_count() == 0 {
        return Err(ScourError::EmptyData("table has no columns".to_string()));
    }

    let mut cleaned = table.clone();
    let mut outcomes = Vec::new();

    if let Some(placeholder) = &config.fill_missing {
        fill_missing(&mut cleaned, placeholder);
    }
    if config.trim_whitespace {
        trim_whitespace(&mut cleaned);
    }
    for column in &config.currency_columns {
        outcomes.push(convert_currency(&mut cleaned, column)?);
    }
    apply_case(&mut cleaned, &config.case)?;
    if config.dedupe {
        dedupe(&mut cleaned);
    }
    rename_columns(&mut cleaned, &config.rename)?;
    if let Some(filter) = &config.filter {
        apply_filter(&mut cleaned, filter)?;
    }

    Ok((cleaned, outcomes))
}

/// Replace every missing cell with the literal placeholder, table-wide.
fn fill_missing(table: &mut Table, placeholder: &str) {
    for row in &mut table.rows {
        for cell in row {
            if cell.is_missing() {
                *cell = Cell::Text(placeholder.to_string());
            }
        }
    }
}

/// Collapse whitespace runs in every text cell to single spaces.
///
/// Normalize-and-rejoin, not a plain trim: internal runs collapse too.
/// Numeric and missing cells are untouched.
fn trim_whitespace(table: &mut Table) {
    for row in &mut table.rows {
        for cell in row {
            if let Cell::Text(s) = cell {
                let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
                *s = collapsed;
            }
        }
    }
}

/// Strip currency decoration from a text value and parse it as a number.
///
/// Thousands commas are dropped after stripping, so "$ 1,200.00" parses
/// as 1200.0.
fn parse_currency(text: &str) -> Option<f64> {
    let stripped = CURRENCY_STRIP.replace_all(text, "");
    let normalized = stripped.replace(',', "");
    let amount = normalized.parse::<f64>().ok()?;
    amount.is_finite().then_some(amount)
}

/// Convert one column to numbers, all-or-nothing.
///
/// A single unparseable value fails the whole column: the column keeps its
/// pre-conversion cells and a failure outcome is recorded. Missing cells
/// stay missing; already-numeric cells are promoted to float so a
/// successfully converted column is uniformly numeric-or-missing.
fn convert_currency(table: &mut Table, column: &str) -> Result<ColumnOutcome> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| ScourError::UnknownColumn(column.to_string()))?;

    let mut converted = Vec::with_capacity(table.row_count());
    let mut values_converted = 0;
    for (row_idx, row) in table.rows.iter().enumerate() {
        match &row[idx] {
            Cell::Missing => converted.push(Cell::Missing),
            Cell::Int(i) => {
                converted.push(Cell::Float(*i as f64));
                values_converted += 1;
            }
            Cell::Float(f) => {
                converted.push(Cell::Float(*f));
                values_converted += 1;
            }
            Cell::Text(s) => match parse_currency(s) {
                Some(amount) => {
                    converted.push(Cell::Float(amount));
                    values_converted += 1;
                }
                None => {
                    return Ok(ColumnOutcome::ConversionFailed {
                        column: column.to_string(),
                        reason: format!("value '{}' at row {} is not numeric", s, row_idx + 1),
                    });
                }
            },
        }
    }

    for (row, cell) in table.rows.iter_mut().zip(converted) {
        row[idx] = cell;
    }

    Ok(ColumnOutcome::ConversionSucceeded {
        column: column.to_string(),
        values_converted,
    })
}

/// Apply the three case buckets to their columns' text cells.
fn apply_case(table: &mut Table, case: &CaseBuckets) -> Result<()> {
    recase(table, &case.upper, |s| s.to_uppercase())?;
    recase(table, &case.lower, |s| s.to_lowercase())?;
    recase(table, &case.title, title_case)?;
    Ok(())
}

fn recase(
    table: &mut Table,
    columns: &[String],
    transform: impl Fn(&str) -> String,
) -> Result<()> {
    for column in columns {
        let idx = table
            .column_index(column)
            .ok_or_else(|| ScourError::UnknownColumn(column.clone()))?;
        for row in &mut table.rows {
            if let Cell::Text(s) = &mut row[idx] {
                let transformed = transform(s);
                *s = transformed;
            }
        }
    }
    Ok(())
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest. Whitespace is preserved as-is.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Remove rows that are exact value-wise duplicates, keeping the first
/// occurrence.
fn dedupe(table: &mut Table) {
    let mut seen = HashSet::new();
    table.rows.retain(|row| seen.insert(Table::row_key(row)));
}

/// Apply the rename mapping; unmapped columns keep their name.
///
/// Duplicate result names are an error rather than silently shadowing
/// each other.
fn rename_columns(table: &mut Table, rename: &IndexMap<String, String>) -> Result<()> {
    if rename.is_empty() {
        return Ok(());
    }

    let renamed: Vec<String> = table
        .columns
        .iter()
        .map(|c| rename.get(c).cloned().unwrap_or_else(|| c.clone()))
        .collect();

    let mut seen = HashSet::new();
    for name in &renamed {
        if !seen.insert(name.as_str()) {
            return Err(ScourError::DuplicateColumn(name.clone()));
        }
    }

    table.columns = renamed;
    Ok(())
}

/// Keep only rows whose cell in the filter column displays as one of the
/// allowed values. An empty allowed set keeps everything.
fn apply_filter(table: &mut Table, filter: &RowFilter) -> Result<()> {
    if filter.allowed.is_empty() {
        return Ok(());
    }

    let idx = table
        .column_index(&filter.column)
        .ok_or_else(|| ScourError::UnknownColumn(filter.column.clone()))?;

    let allowed: HashSet<&str> = filter.allowed.iter().map(String::as_str).collect();
    table
        .rows
        .retain(|row| allowed.contains(row[idx].display().as_str()));
    Ok(())
}
