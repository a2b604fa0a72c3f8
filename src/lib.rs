//! `weather-summary` library crate.
//!
//! The binary (`wx`) is a thin wrapper around this library so that:
//!
//! - the load → statistics → report pipeline is testable without spawning processes
//! - the loader and report functions can be reused with other data sources

pub mod app;
pub mod cli;
pub mod convert;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;

pub use convert::{convert_date, convert_f_to_c, format_temperature};
pub use domain::{DayRecord, Extremum};
pub use error::{Result, WeatherError};
pub use io::{load_data_from_csv, load_records_from_reader};
pub use report::{generate_daily_summary, generate_summary};
pub use stats::{calculate_mean, find_max, find_min};
