//! Presentation-time conversions: temperatures and dates.

pub mod date;
pub mod temperature;

pub use date::*;
pub use temperature::*;
