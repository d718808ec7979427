//! Terminal and JSON rendering of a dashboard snapshot

use std::fmt::{self, Write};

use macropulse_core::DashboardSnapshot;
use macropulse_core::format::{format_date, format_number, format_signed, format_value};
use macropulse_core::questions::DeepDive;
use serde::Serialize;

use crate::ingest::{LoadReport, SeriesStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything printed for one run
pub struct Report<'a> {
    pub snapshot: &'a DashboardSnapshot,
    pub load: &'a LoadReport,
    pub deep_dive: Option<&'a DeepDive>,
    /// Number of drivers listed
    pub top: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    coverage: String,
    sources: Vec<JsonSource<'a>>,
    snapshot: &'a DashboardSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    deep_dive: Option<&'a DeepDive>,
}

#[derive(Serialize)]
struct JsonSource<'a> {
    id: &'a str,
    status: SeriesStatus,
}

/// Error types for report rendering
#[derive(Debug)]
pub enum RenderError {
    Text(fmt::Error),
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Text(e) => write!(f, "Text rendering failed: {}", e),
            RenderError::Json(e) => write!(f, "JSON rendering failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Text(e) => Some(e),
            RenderError::Json(e) => Some(e),
        }
    }
}

impl Report<'_> {
    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Text => self.render_text().map_err(RenderError::Text),
            OutputFormat::Json => self.render_json().map_err(RenderError::Json),
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            coverage: self.load.coverage(),
            sources: self
                .load
                .statuses
                .iter()
                .map(|&(id, status)| JsonSource { id, status })
                .collect(),
            snapshot: self.snapshot,
            deep_dive: self.deep_dive,
        };
        serde_json::to_string_pretty(&report)
    }

    pub fn render_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_text(&mut out)?;
        Ok(out)
    }

    fn write_text(&self, out: &mut impl Write) -> fmt::Result {
        let s = self.snapshot;

        writeln!(out, "MacroPulse  {}", self.load.coverage_badge())?;
        writeln!(out, "Sources: {}", self.load.coverage())?;
        writeln!(out)?;

        writeln!(
            out,
            "Macro score: {} / 100  {} ({})",
            format_number(Some(s.score), 0),
            s.score_note,
            s.pulse.as_str()
        )?;
        if s.scenario.score_delta != 0.0 {
            writeln!(
                out,
                "Scenario score: {} ({})",
                format_number(Some(s.scenario.scenario_score), 0),
                format_signed(s.scenario.score_delta, 0)
            )?;
        }
        writeln!(out, "{}", s.scenario_summaries.sentence)?;
        writeln!(out)?;

        writeln!(out, "Regime: {} ({})", s.regime.label, s.regime.note)?;
        writeln!(out, "  {}", s.regime.insight)?;
        if let Some(map) = &s.regime_map {
            writeln!(out, "  {}", map.note)?;
        }
        writeln!(out)?;

        writeln!(out, "Call [{}]: {}", s.call.conviction.as_str(), s.call.headline)?;
        writeln!(out, "  {}", s.call.detail)?;
        writeln!(out)?;

        writeln!(out, "Drivers")?;
        let drivers = s.top_drivers(self.top);
        if drivers.is_empty() {
            writeln!(out, "  No drivers yet.")?;
        }
        for driver in drivers {
            writeln!(out, "  {:<18} {:>6}", driver.label, format_signed(driver.impact, 1))?;
        }
        writeln!(out)?;

        writeln!(out, "Questions")?;
        for card in &s.questions {
            writeln!(
                out,
                "  {:<42} {} [{}]",
                card.prompt,
                card.answer.title,
                card.answer.status.label()
            )?;
            if !card.answer.footnote.is_empty() {
                writeln!(out, "  {:<42} {}", "", card.answer.footnote)?;
            }
        }
        writeln!(out)?;

        writeln!(out, "Latest readings")?;
        for row in &s.latest {
            writeln!(
                out,
                "  {:<24} {:>8}  {:<13} {:>7}",
                row.indicator.label,
                format_value(row.value, row.indicator.unit),
                format_date(row.date),
                format_signed(row.trend, 3)
            )?;
        }

        if let Some(growth) = &s.growth {
            writeln!(out)?;
            writeln!(
                out,
                "Long-run growth: latest {} ({}), 20y avg {}, 10y vol {}",
                format_value(Some(growth.latest.value()), "%"),
                format_date(Some(growth.latest.date())),
                format_value(growth.long_run_average, "%"),
                format_value(growth.volatility, "%")
            )?;
        }

        if let Some(dive) = self.deep_dive {
            writeln!(out)?;
            write_deep_dive(out, dive)?;
        }
        Ok(())
    }
}

fn write_deep_dive(out: &mut impl Write, dive: &DeepDive) -> fmt::Result {
    writeln!(out, "Deep dive: {}", dive.prompt)?;
    writeln!(out, "  {}", dive.narrative)?;
    if dive.stats.is_empty() {
        writeln!(out, "  No source data connected.")?;
    }
    for stat in &dive.stats {
        writeln!(
            out,
            "  {:<24} {:>8}  3-step {:>6}  6-step {:>6}",
            stat.label,
            format_value(Some(stat.latest), stat.unit),
            format_signed(stat.change_3, 2),
            format_signed(stat.change_6, 2)
        )?;
    }
    Ok(())
}
