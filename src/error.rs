//! Error type shared by every stage of the pipeline.
//!
//! Each variant maps to a process exit code (see [`WeatherError::exit_code`]) so
//! the binary can stay a thin wrapper:
//!
//! - `2`: bad input or configuration
//! - `3`: no data to summarise
//! - `4`: output could not be written

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Cannot convert '{input}' to a temperature.")]
    Conversion { input: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DDTHH:MM:SS+HH:MM ({reason}).")]
    DateParse { input: String, reason: String },

    #[error("{source_name}, line {line}: {message}")]
    DataFormat {
        source_name: String,
        line: u64,
        message: String,
    },

    #[error("Failed to read weather data '{source_name}': {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot compute the {what} of an empty series.")]
    EmptySeries { what: &'static str },

    #[error("Failed to write '{}': {message}", .path.display())]
    Export { path: PathBuf, message: String },

    #[error("{0}")]
    Config(String),
}

impl WeatherError {
    pub fn exit_code(&self) -> u8 {
        match self {
            WeatherError::Conversion { .. }
            | WeatherError::DateParse { .. }
            | WeatherError::DataFormat { .. }
            | WeatherError::SourceUnavailable { .. }
            | WeatherError::Config(_) => 2,
            WeatherError::EmptySeries { .. } => 3,
            WeatherError::Export { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
