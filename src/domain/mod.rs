//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed input row (`DayRecord`)
//! - statistics results (`Extremum`)
//! - report data (`Overview`, `DailyEntry`)
//! - run configuration (`ReportConfig`, `ReportMode`)

pub mod types;

pub use types::*;
