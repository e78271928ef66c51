//! Stats command - descriptive statistics for numeric columns.

use std::path::PathBuf;

use colored::Colorize;
use scour::{describe, Loader};

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (table, source) = Loader::new().load_path(&file)?;
    let stats = describe(&table);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if verbose {
        println!(
            "{} {} ({} rows, {} columns)",
            "Loaded".cyan().bold(),
            source.file.white(),
            source.row_count,
            source.column_count
        );
        println!();
    }

    if stats.is_empty() {
        println!(
            "{} No numeric columns found. Currency-formatted text columns can \
             be converted with 'scour clean --currency COLUMN'.",
            "Note:".yellow().bold()
        );
        return Ok(());
    }

    println!(
        "{:<20} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in &stats {
        println!(
            "{:<20} {:>7} {:>12.4} {:>12} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            s.column,
            s.count,
            s.mean,
            s.std
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string()),
            s.min,
            s.q25,
            s.median,
            s.q75,
            s.max
        );
    }

    Ok(())
}
