//! Input/output helpers.
//!
//! - CSV ingest (`ingest`)
//! - record CSV and overview JSON exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
