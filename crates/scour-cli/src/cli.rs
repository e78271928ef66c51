//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scour: cleaning pipeline for messy tabular files
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a data file and export the result
    Clean(CleanArgs),

    /// Show descriptive statistics for the numeric columns of a file
    Stats {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit a bar-chart spec as JSON for a rendering frontend
    Chart {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text column for the X axis
        #[arg(short = 'x', long, value_name = "COLUMN")]
        x_column: String,

        /// Numeric column for the Y axis
        #[arg(short = 'y', long, value_name = "COLUMN")]
        y_column: String,

        /// Output path for the spec (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the data file (CSV/TSV/XLSX)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path for cleaned data (default: <file>_cleaned.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Load the cleaning configuration from a JSON file; flags below add
    /// to it
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Remove rows that are exact duplicates
    #[arg(long)]
    pub dedupe: bool,

    /// Replace missing cells with this value
    #[arg(long, value_name = "VALUE")]
    pub fill: Option<String>,

    /// Keep whitespace as-is instead of collapsing runs to single spaces
    #[arg(long)]
    pub no_trim: bool,

    /// Column with currency text to convert to numbers (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub currency: Vec<String>,

    /// Column to convert to UPPERCASE (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub upper: Vec<String>,

    /// Column to convert to lowercase (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub lower: Vec<String>,

    /// Column to convert to Title Case (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub title: Vec<String>,

    /// Rename a column (repeatable)
    #[arg(long, value_name = "OLD=NEW")]
    pub rename: Vec<String>,

    /// Column to filter on (its final, post-rename name)
    #[arg(long, value_name = "COLUMN", requires = "filter_value")]
    pub filter_column: Option<String>,

    /// Allowed value for the filter column (repeatable)
    #[arg(long, value_name = "VALUE", requires = "filter_column")]
    pub filter_value: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Xlsx,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            _ => Err(format!("Unknown format: {}. Use csv or xlsx.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}
