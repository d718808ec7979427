//! Macro indicator scoring library
//!
//! This crate turns macroeconomic time series into dashboard signals.
//! It provides:
//! - Series analytics (trend slope, deltas, cadence and long-run statistics)
//! - A weighted composite macro score with a ranked driver breakdown
//! - Regime classification from the latest inflation and growth readings
//! - A scenario library with additive what-if shocks
//! - Diagnostic question answers and headline narrative copy
//! - Closed-form teaching calculators for the macro lab panel
//!
//! Every function is pure: callers pass a fully materialized
//! [`SeriesCollection`], [`WeightConfig`] and [`ScenarioFlags`] and get a
//! well-formed result back for any input shape, including empty collections.
//!
//! ```ignore
//! use macropulse_core::{ScenarioFlags, ScenarioId, Series, SeriesCollection, WeightConfig};
//!
//! let series = SeriesCollection::new()
//!     .with("cpi", Series::from_pairs([("2024-01-01", 3.4), ("2024-02-01", 3.1)])?)
//!     .with("gdp", Series::from_pairs([("2024-01-01", 2.6)])?);
//!
//! let flags = ScenarioFlags::new().with(ScenarioId::OilShock, true);
//! let snapshot = macropulse_core::evaluate(&series, &WeightConfig::default(), &flags);
//! println!("{} / 100, {}", snapshot.score, snapshot.regime.label);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analytics;
pub mod dashboard;
pub mod date_math;
pub mod error;
pub mod regime;
pub mod scenario;
pub mod scoring;

// ============================================================================
// Catalog and presentation helpers
// ============================================================================

pub mod catalog;
pub mod format;
pub mod lab;
pub mod narrative;
pub mod questions;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dashboard::{DashboardSnapshot, evaluate};
pub use error::{ParseIdError, PointError};
pub use model::{
    DriverKind, Point, ScenarioFlags, ScenarioId, Series, SeriesCollection, WeightCategory,
    WeightConfig,
};
pub use regime::{Regime, RegimeLabel, compute_regime};
pub use scenario::{ScenarioImpact, SummaryStyle};
pub use scoring::{Driver, macro_score, score_components, score_drivers};
