//! Testing infrastructure for the diagnostics pipeline:
//! - `RecordingSink`: sink double that captures submitted reports
//! - `fixtures`: sample event construction and config-file placement

pub mod fixtures;
pub mod sink;

pub use sink::RecordingSink;
