//! Composition root for the diagnostics pipeline.
//!
//! Owns configuration loading and constructs the dependency-injected
//! [`Diagnostics`] service that the rest of the companion app uses to
//! report simulator terminal cases and to drain them once a match
//! concludes.

pub mod config;
pub mod error;
pub mod service;

pub use config::{Config, DiagnosticsConfig};
pub use error::{Error, Result};
pub use service::Diagnostics;
