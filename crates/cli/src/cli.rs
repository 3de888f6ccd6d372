//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extracts joint-committee sector codes from PDF batches into a CSV table
#[derive(Parser)]
#[command(name = "paritex")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PARITEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract sector codes from a PDF or a directory of PDFs
    Scan(ScanArgs),
    /// Render the accumulated result table
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// PDF file or directory of PDFs to process
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving output.csv and run logs
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Re-run documents that yielded no codes with the OCR strategy
    #[arg(long = "redo-empty")]
    pub redo_empty: bool,

    /// Append progress messages to logs.txt in the output directory
    #[arg(long)]
    pub log: bool,

    /// Append extraction errors to error_logs.txt in the output directory
    #[arg(long)]
    pub errors: bool,

    /// Number of worker threads
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Directory containing output.csv (the scan output directory)
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for the report command.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
