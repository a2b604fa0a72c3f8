//! Command-line parsing for the weather summary tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading/statistics/report code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Environment variable consulted when no CSV path is given.
pub const DATA_ENV_VAR: &str = "WX_DATA_CSV";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "wx", version, about = "Daily weather CSV summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the multi-day overview.
    Overview(ReportArgs),
    /// Print one block per day.
    Daily(ReportArgs),
    /// Print the overview followed by the daily blocks.
    All(ReportArgs),
}

/// Options shared by every report.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Weather CSV (`date,min,max`). Falls back to `WX_DATA_CSV` (or `.env`).
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Export the overview to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Re-export the loaded records to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}
