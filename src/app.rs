//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - resolves the input path (argument, then `WX_DATA_CSV` / `.env`)
//! - runs the report pipeline and prints the result

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DATA_ENV_VAR, ReportArgs};
use crate::domain::{ReportConfig, ReportMode};
use crate::error::{Result, WeatherError};

pub mod pipeline;

const DEFAULT_LOG_FILTER: &str = "warn,weather_summary=info";

/// Entry point for the `wx` binary.
pub fn run() -> Result<()> {
    init_logging();

    // `wx week.csv` behaves like `wx all week.csv`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let (mode, args) = match cli.command {
        Command::Overview(args) => (ReportMode::Overview, args),
        Command::Daily(args) => (ReportMode::Daily, args),
        Command::All(args) => (ReportMode::All, args),
    };

    let config = report_config_from_args(&args, mode)?;
    let output = pipeline::run_report(&config)?;
    print!("{}", output.render());
    Ok(())
}

/// Initialise `tracing` output on stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // `try_init` so repeated calls (e.g. from tests) are harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn report_config_from_args(args: &ReportArgs, mode: ReportMode) -> Result<ReportConfig> {
    let csv_path = resolve_csv_path(args.csv.clone(), || {
        dotenvy::dotenv().ok();
        std::env::var(DATA_ENV_VAR).ok()
    })?;

    Ok(ReportConfig {
        csv_path,
        mode,
        export_json: args.export_json.clone(),
        export_csv: args.export_csv.clone(),
    })
}

/// An explicit path wins; otherwise fall back to the environment lookup.
fn resolve_csv_path(arg: Option<PathBuf>, env_lookup: impl FnOnce() -> Option<String>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }
    env_lookup()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            WeatherError::Config(format!(
                "No weather CSV given. Pass a path or set `{DATA_ENV_VAR}` (environment or .env)."
            ))
        })
}

/// Rewrite argv so `wx` defaults to `wx all`.
///
/// Rules:
/// - `wx`                        -> `wx all`
/// - `wx week.csv ...`           -> `wx all week.csv ...`
/// - `wx --export-json x ...`    -> `wx all --export-json x ...`
/// - `wx --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    let is_subcommand = matches!(arg1.as_str(), "overview" | "daily" | "all");
    if is_top_level_help_or_version || is_subcommand {
        return argv;
    }

    argv.insert(1, "all".to_string());
    argv
}
