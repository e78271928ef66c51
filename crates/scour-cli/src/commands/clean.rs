//! Clean command - run the pipeline and export the cleaned data.

use std::fs;

use colored::Colorize;
use scour::{CleanConfig, Cleaner, RowFilter};

use crate::cli::{CleanArgs, OutputFormat};

pub fn run(args: CleanArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let config = build_config(&args)?;
    config.validate()?;

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        args.file.display().to_string().white()
    );

    let cleaner = Cleaner::new(config);
    let run = cleaner.run_path(&args.file)?;

    println!();
    println!(
        "  {:18} {}",
        "Original rows:",
        run.summary.original_rows.to_string().white().bold()
    );
    println!(
        "  {:18} {}",
        "Cleaned rows:",
        run.summary.cleaned_rows.to_string().white().bold()
    );
    println!(
        "  {:18} {}",
        "Columns:",
        run.summary.columns.to_string().white().bold()
    );

    for outcome in &run.outcomes {
        if outcome.is_failure() {
            println!("{} {}", "Warning:".yellow().bold(), outcome.description());
        } else {
            println!("{} {}", "Converted:".green().bold(), outcome.description());
        }
    }

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for column in &run.cleaned.columns {
            println!("  {}", column);
        }
    }

    // Default output name mirrors the input next to it.
    let output_path = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .file
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        args.file
            .with_file_name(format!("{}_cleaned.{}", stem, args.format))
    });

    let bytes = match args.format {
        OutputFormat::Csv => run.to_csv_bytes()?,
        OutputFormat::Xlsx => run.to_xlsx_bytes()?,
    };
    fs::write(&output_path, bytes)?;

    println!();
    println!(
        "{} {}",
        "Saved".green().bold(),
        output_path.display().to_string().cyan()
    );

    Ok(())
}

/// Build the pipeline configuration from the config file plus flags.
fn build_config(args: &CleanArgs) -> Result<CleanConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => CleanConfig::from_path(path)?,
        None => CleanConfig::default(),
    };

    if args.dedupe {
        config.dedupe = true;
    }
    if let Some(fill) = &args.fill {
        config.fill_missing = Some(fill.clone());
    }
    if args.no_trim {
        config.trim_whitespace = false;
    }
    config.currency_columns.extend(args.currency.iter().cloned());
    config.case.upper.extend(args.upper.iter().cloned());
    config.case.lower.extend(args.lower.iter().cloned());
    config.case.title.extend(args.title.iter().cloned());

    for pair in &args.rename {
        let (old, new) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid rename '{}'. Use OLD=NEW.", pair))?;
        config.rename.insert(old.to_string(), new.to_string());
    }

    if let Some(column) = &args.filter_column {
        config.filter = Some(RowFilter {
            column: column.clone(),
            allowed: args.filter_value.clone(),
        });
    }

    Ok(config)
}
