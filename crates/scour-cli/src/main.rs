//! Scour CLI - cleaning pipeline for tabular data files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean(args) => commands::clean::run(args, cli.verbose),

        Commands::Stats { file, json } => commands::stats::run(file, json, cli.verbose),

        Commands::Chart {
            file,
            x_column,
            y_column,
            output,
        } => commands::chart::run(file, x_column, y_column, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
