//! Chart command - emit a bar-chart spec for a rendering frontend.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use scour::{bar_chart, chart_columns, Loader};

pub fn run(
    file: PathBuf,
    x_column: String,
    y_column: String,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (table, _) = Loader::new().load_path(&file)?;

    let candidates = chart_columns(&table);
    if verbose {
        println!(
            "{} categorical: {:?}, numeric: {:?}",
            "Axes:".yellow().bold(),
            candidates.categorical,
            candidates.numeric
        );
    }
    if !candidates.chart_available() {
        println!(
            "{} A chart needs at least one text and one numeric column. \
             Currency-formatted text columns can be converted with \
             'scour clean --currency COLUMN'.",
            "Note:".yellow().bold()
        );
        return Ok(());
    }

    let spec = bar_chart(&table, &x_column, &y_column)?;
    let json = serde_json::to_string_pretty(&spec)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!(
                "{} {}",
                "Saved".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
