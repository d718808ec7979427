//! Terminal front end for the macro indicator dashboard
//!
//! This crate loads indicator series from JSON files, applies persisted
//! weights and scenario toggles, runs the `macropulse_core` engine once and
//! renders the result. It provides:
//! - Payload normalization and per-series live/fallback/missing loading
//! - YAML preference storage in the data directory
//! - Text and JSON reports
//! - File logging with size-based rotation

pub mod app;
pub mod ingest;
pub mod logging;
pub mod preferences;
pub mod report;
pub mod util;

pub use app::{RunOptions, run};
pub use logging::init_logging;
pub use preferences::{Overrides, PreferenceStore, Preferences};
pub use report::OutputFormat;
