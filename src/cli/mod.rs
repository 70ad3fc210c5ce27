//! Command-line parsing for the sales report generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data-shaping code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sdash", version, about = "Synthetic sales report generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the dataset and write the interactive HTML report.
    Report(ReportArgs),
    /// Print dataset stats and per-category totals without writing a file.
    Summary(GenArgs),
}

/// Dataset generation options.
#[derive(Debug, Parser, Clone)]
pub struct GenArgs {
    /// Number of synthetic sales records to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub rows: usize,

    /// Random seed for dataset generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for the full report run.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub r#gen: GenArgs,

    /// Output file for the HTML report; `.html` is appended when missing.
    /// Prompts interactively when omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Export the raw dataset to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
