use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use mutantscan::{
    cli::{Cli, OutputFormat},
    grid::DnaGrid,
    json_output::JsonVerdict,
    scanner,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Collect grid rows from args, a file, or stdin, uppercased.
///
/// Stdin protocol matches the interactive convention: one row per line,
/// a blank line or EOF ends the grid.
fn read_rows(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read grid from {}", path.display()))?;
        return Ok(text
            .lines()
            .map(normalize_row)
            .filter(|row| !row.is_empty())
            .collect());
    }

    if !cli.rows.is_empty() {
        return Ok(cli.rows.iter().map(|row| normalize_row(row)).collect());
    }

    let stdin = io::stdin();
    let mut rows = Vec::new();
    for line in stdin.lock().lines() {
        let row = normalize_row(&line.context("failed to read row from stdin")?);
        if row.is_empty() {
            break;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn normalize_row(line: &str) -> String {
    line.trim().to_uppercase()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = cli.detector_config();
    let rows = read_rows(&cli)?;
    let grid = DnaGrid::parse(&rows, &config)?;
    let mutant = scanner::is_mutant(&grid, &config);

    match cli.format {
        OutputFormat::Text => {
            println!(
                "{}",
                if mutant {
                    "Mutant detected!"
                } else {
                    "No mutant detected"
                }
            );
        }
        OutputFormat::Json => {
            let verdict = JsonVerdict::new(&grid, mutant);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(())
}
