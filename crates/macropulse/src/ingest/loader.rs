//! Reads every catalog series from disk for one refresh cycle

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use macropulse_core::{Series, SeriesCollection};

use super::IngestError;
use super::normalize::normalize_series;

/// Where series files are looked up
#[derive(Debug, Clone)]
pub struct SeriesSources {
    /// Primary directory of `<id>.json` files
    pub series_dir: PathBuf,
    /// Consulted when the primary file is missing, broken or empty
    pub fallback_dir: Option<PathBuf>,
}

impl SeriesSources {
    pub fn new(series_dir: PathBuf) -> Self {
        Self {
            series_dir,
            fallback_dir: None,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback_dir: PathBuf) -> Self {
        self.fallback_dir = Some(fallback_dir);
        self
    }

    fn series_path(dir: &Path, id: &str) -> PathBuf {
        dir.join(format!("{id}.json"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStatus {
    Live,
    Fallback,
    Missing,
}

impl SeriesStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesStatus::Live => "live",
            SeriesStatus::Fallback => "fallback",
            SeriesStatus::Missing => "missing",
        }
    }
}

/// Read and normalize one series file.
pub fn read_series_file(path: &Path) -> Result<Series, IngestError> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let series = normalize_series(&payload);
    if series.is_empty() {
        return Err(IngestError::EmptySeries {
            path: path.to_path_buf(),
        });
    }
    Ok(series)
}

/// Load one series, trying the primary directory then the fallback.
/// A missing series comes back empty.
pub fn load_series(id: &str, sources: &SeriesSources) -> (SeriesStatus, Series) {
    let primary = SeriesSources::series_path(&sources.series_dir, id);
    match read_series_file(&primary) {
        Ok(series) => {
            tracing::debug!(series = id, points = series.len(), "Loaded live series");
            return (SeriesStatus::Live, series);
        }
        Err(e) => tracing::warn!(series = id, "{e}"),
    }

    if let Some(dir) = &sources.fallback_dir {
        match read_series_file(&SeriesSources::series_path(dir, id)) {
            Ok(series) => {
                tracing::info!(series = id, points = series.len(), "Using fallback series");
                return (SeriesStatus::Fallback, series);
            }
            Err(e) => tracing::warn!(series = id, "Fallback unavailable: {e}"),
        }
    }

    (SeriesStatus::Missing, Series::default())
}

/// Outcome of loading every requested series
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub collection: SeriesCollection,
    /// Per-series status, in request order
    pub statuses: Vec<(&'static str, SeriesStatus)>,
}

impl LoadReport {
    pub fn count(&self, status: SeriesStatus) -> usize {
        self.statuses.iter().filter(|(_, s)| *s == status).count()
    }

    /// e.g. `8 live · 2 fallback · 1 missing`
    pub fn coverage(&self) -> String {
        format!(
            "{} live · {} fallback · {} missing",
            self.count(SeriesStatus::Live),
            self.count(SeriesStatus::Fallback),
            self.count(SeriesStatus::Missing)
        )
    }

    /// e.g. `Coverage: 8/11 live`
    pub fn coverage_badge(&self) -> String {
        format!(
            "Coverage: {}/{} live",
            self.count(SeriesStatus::Live),
            self.statuses.len()
        )
    }
}

/// Load every id in `ids`. Failures never abort the load; they only
/// downgrade a series to fallback or missing.
pub fn load_catalog(ids: &[&'static str], sources: &SeriesSources) -> LoadReport {
    #[cfg(feature = "parallel")]
    let loaded: Vec<(&'static str, SeriesStatus, Series)> = ids
        .par_iter()
        .map(|&id| {
            let (status, series) = load_series(id, sources);
            (id, status, series)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let loaded: Vec<(&'static str, SeriesStatus, Series)> = ids
        .iter()
        .map(|&id| {
            let (status, series) = load_series(id, sources);
            (id, status, series)
        })
        .collect();

    let mut report = LoadReport::default();
    for (id, status, series) in loaded {
        if status != SeriesStatus::Missing {
            report.collection.insert(id, series);
        }
        report.statuses.push((id, status));
    }

    tracing::info!(coverage = %report.coverage(), "Series load complete");
    report
}
