//! One refresh cycle: load, score, render

use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use macropulse_core::catalog::INDICATORS;
use macropulse_core::questions::{QuestionId, deep_dive};

use crate::ingest::{SeriesSources, load_catalog};
use crate::preferences::{Overrides, PreferenceStore};
use crate::report::{OutputFormat, Report};

/// Everything a run needs beyond the stored preferences
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub sources: SeriesSources,
    pub overrides: Overrides,
    pub question: Option<QuestionId>,
    pub format: OutputFormat,
    pub top: usize,
    /// Write the effective preferences back after the run
    pub save_preferences: bool,
}

impl RunOptions {
    pub fn new(series_dir: PathBuf) -> Self {
        Self {
            sources: SeriesSources::new(series_dir),
            overrides: Overrides::default(),
            question: None,
            format: OutputFormat::Text,
            top: 3,
            save_preferences: false,
        }
    }
}

/// Run one refresh cycle and return the rendered report
pub fn run(store: &PreferenceStore, options: &RunOptions) -> color_eyre::Result<String> {
    let mut preferences = store.load().wrap_err("Failed to load preferences")?;
    preferences.apply_overrides(&options.overrides);

    let ids: Vec<&'static str> = INDICATORS.iter().map(|i| i.id).collect();
    let load = load_catalog(&ids, &options.sources);

    let snapshot = macropulse_core::evaluate(
        &load.collection,
        &preferences.weights,
        &preferences.scenarios,
    );
    tracing::info!(
        score = snapshot.score,
        regime = %snapshot.regime.label,
        drivers = snapshot.drivers.len(),
        "Dashboard evaluated"
    );

    let dive = options.question.map(|q| deep_dive(q, &load.collection));

    let rendered = Report {
        snapshot: &snapshot,
        load: &load,
        deep_dive: dive.as_ref(),
        top: options.top,
    }
    .render(options.format)
    .wrap_err("Failed to render report")?;

    if options.save_preferences {
        store
            .save(&preferences)
            .wrap_err("Failed to save preferences")?;
    }

    Ok(rendered)
}
