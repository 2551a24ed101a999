//! CLI argument parsing for mutantscan

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DetectorConfig;

/// Output format for detection verdicts
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mutantscan")]
#[command(version)]
#[command(about = "Detect mutant DNA in a square base grid", long_about = None)]
pub struct Cli {
    /// Grid rows, top to bottom (e.g. ATGCGA CAGTGC ...). When omitted and
    /// no --file is given, rows are read from stdin until a blank line.
    #[arg(value_name = "ROW", conflicts_with = "file")]
    pub rows: Vec<String>,

    /// Read grid rows from a file, one row per line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Length of an aligned run of identical bases
    #[arg(long = "run-length", value_name = "LEN", default_value = "4")]
    pub run_length: usize,

    /// Mutant iff strictly more runs than this are found
    #[arg(long = "threshold", value_name = "COUNT", default_value = "1")]
    pub threshold: usize,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Detector configuration from the CLI overrides.
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            run_length: self.run_length,
            mutant_threshold: self.threshold,
            ..DetectorConfig::dna()
        }
    }
}
