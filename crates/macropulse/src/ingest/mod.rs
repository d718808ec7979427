//! File-based series ingestion.
//!
//! Each catalog indicator is read from `<dir>/<id>.json`. Payloads come in
//! several shapes and are normalized into a [`Series`] before the engine sees
//! them. A failed read falls back to a second directory, then to nothing.
//!
//! [`Series`]: macropulse_core::Series

mod loader;
mod normalize;

pub use loader::{
    LoadReport, SeriesSources, SeriesStatus, load_catalog, load_series, read_series_file,
};
pub use normalize::normalize_series;

use std::path::PathBuf;

/// Error types for reading one series file
#[derive(Debug)]
pub enum IngestError {
    /// File missing or unreadable
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not valid JSON
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Payload held no usable points after normalization
    EmptySeries { path: PathBuf },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            IngestError::Json { path, source } => {
                write!(f, "Invalid JSON in {}: {}", path.display(), source)
            }
            IngestError::EmptySeries { path } => {
                write!(f, "No usable points in {}", path.display())
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io { source, .. } => Some(source),
            IngestError::Json { source, .. } => Some(source),
            IngestError::EmptySeries { .. } => None,
        }
    }
}
