//! Headline copy derived from the score, regime and recent momentum.

use serde::{Deserialize, Serialize};

use crate::model::ids::{INFLATION_SERIES, POLICY_RATE, UNEMPLOYMENT};
use crate::model::{ScenarioFlags, Series, SeriesCollection};
use crate::regime::Regime;
use crate::scenario::{SummaryStyle, scenario_summary};

/// One-line read of the score for the hero card
pub fn score_note(score: f64) -> &'static str {
    if score >= 65.0 {
        "Expansion leaning"
    } else if score >= 45.0 {
        "Balanced"
    } else {
        "Caution"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pulse {
    Expanding,
    Steady,
    Cooling,
    Risky,
}

impl Pulse {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Pulse::Expanding
        } else if score >= 55.0 {
            Pulse::Steady
        } else if score >= 40.0 {
            Pulse::Cooling
        } else {
            Pulse::Risky
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pulse::Expanding => "Expanding",
            Pulse::Steady => "Steady",
            Pulse::Cooling => "Cooling",
            Pulse::Risky => "Risky",
        }
    }

    /// Lower-case wording used inside the call headline
    fn call_phrase(self) -> &'static str {
        match self {
            Pulse::Expanding => "expanding",
            Pulse::Steady => "steady",
            Pulse::Cooling => "cooling",
            Pulse::Risky => "risk-on pause",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conviction {
    High,
    Medium,
    Guarded,
}

impl Conviction {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Conviction::High
        } else if score >= 55.0 {
            Conviction::Medium
        } else {
            Conviction::Guarded
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Conviction::High => "High",
            Conviction::Medium => "Medium",
            Conviction::Guarded => "Guarded",
        }
    }
}

fn posture(score: f64) -> &'static str {
    if score >= 65.0 {
        "lean risk-on"
    } else if score >= 50.0 {
        "stay balanced"
    } else {
        "stay defensive"
    }
}

/// Momentum sentence covering inflation, labor and the policy rate
pub fn shift_narrative(series: &SeriesCollection) -> String {
    let inflation_line = match series.first_present(&INFLATION_SERIES) {
        Some(s) => format!("Inflation momentum {}.", direction(s, "easing", "rising", "steady")),
        None => "Inflation feed not connected.".to_string(),
    };
    let labor_line = match series.present(UNEMPLOYMENT) {
        Some(s) => format!(
            "Labor market {}.",
            direction(s, "tightening", "loosening", "stable")
        ),
        None => "Labor feed not connected.".to_string(),
    };
    let rate_line = match series.present(POLICY_RATE).and_then(Series::latest_value) {
        Some(rate) => format!("Policy rate at {rate:.2}%."),
        None => "Policy feed not connected.".to_string(),
    };

    format!("{inflation_line} {labor_line} {rate_line}")
}

fn direction(
    series: &Series,
    falling: &'static str,
    rising: &'static str,
    flat: &'static str,
) -> &'static str {
    let slope = series.slope(6);
    if slope < 0.0 {
        falling
    } else if slope > 0.0 {
        rising
    } else {
        flat
    }
}

/// The analyst call: headline, supporting detail and conviction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub headline: String,
    pub detail: String,
    pub conviction: Conviction,
}

pub fn build_call(
    score: f64,
    regime: &Regime,
    series: &SeriesCollection,
    flags: &ScenarioFlags,
) -> Call {
    let headline = format!(
        "{} with {} pulse. I {}.",
        regime.label,
        Pulse::from_score(score).call_phrase(),
        posture(score)
    );
    let detail = format!(
        "{} {}",
        shift_narrative(series),
        scenario_summary(flags, SummaryStyle::Short)
    )
    .trim()
    .to_string();

    Call {
        headline,
        detail,
        conviction: Conviction::from_score(score),
    }
}
