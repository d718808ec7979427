//! Scenario library and composer.
//!
//! Each scenario is a fixed additive shock. Active scenarios are summed
//! independently with no interaction terms, and the scenario score is
//! clamped once after all deltas are applied.

use serde::{Deserialize, Serialize};

use crate::model::{ScenarioFlags, ScenarioId};
use crate::scoring::clamp_score;

/// Immutable catalog entry for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioDefinition {
    pub id: ScenarioId,
    pub label: &'static str,
    pub description: &'static str,
    /// Added to latest inflation, percentage points
    pub inflation_offset: f64,
    /// Added to latest growth, percentage points
    pub growth_offset: f64,
    /// Added to the macro score
    pub score_delta: f64,
}

pub static SCENARIO_LIBRARY: [ScenarioDefinition; 4] = [
    ScenarioDefinition {
        id: ScenarioId::OilShock,
        label: "Oil shock",
        description: "+inflation, -growth",
        inflation_offset: 0.4,
        growth_offset: -0.2,
        score_delta: -6.0,
    },
    ScenarioDefinition {
        id: ScenarioId::PolicyCut,
        label: "Policy cut",
        description: "-inflation, +growth",
        inflation_offset: -0.2,
        growth_offset: 0.3,
        score_delta: 4.0,
    },
    ScenarioDefinition {
        id: ScenarioId::CreditTightening,
        label: "Credit tightening",
        description: "-growth, +risk",
        inflation_offset: 0.1,
        growth_offset: -0.4,
        score_delta: -5.0,
    },
    ScenarioDefinition {
        id: ScenarioId::DemandSurge,
        label: "Demand surge",
        description: "+growth, +inflation",
        inflation_offset: 0.3,
        growth_offset: 0.4,
        score_delta: 5.0,
    },
];

impl ScenarioId {
    pub fn definition(self) -> &'static ScenarioDefinition {
        match self {
            ScenarioId::OilShock => &SCENARIO_LIBRARY[0],
            ScenarioId::PolicyCut => &SCENARIO_LIBRARY[1],
            ScenarioId::CreditTightening => &SCENARIO_LIBRARY[2],
            ScenarioId::DemandSurge => &SCENARIO_LIBRARY[3],
        }
    }
}

/// Combined inflation/growth offsets of the active scenarios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioImpact {
    pub inflation: f64,
    pub growth: f64,
}

impl ScenarioImpact {
    pub fn is_zero(&self) -> bool {
        self.inflation == 0.0 && self.growth == 0.0
    }
}

fn active_definitions(
    flags: &ScenarioFlags,
) -> impl Iterator<Item = &'static ScenarioDefinition> + '_ {
    flags.active().map(ScenarioId::definition)
}

pub fn scenario_impact(flags: &ScenarioFlags) -> ScenarioImpact {
    active_definitions(flags).fold(ScenarioImpact::default(), |acc, s| ScenarioImpact {
        inflation: acc.inflation + s.inflation_offset,
        growth: acc.growth + s.growth_offset,
    })
}

pub fn scenario_delta(flags: &ScenarioFlags) -> f64 {
    active_definitions(flags).map(|s| s.score_delta).sum()
}

/// `clamp(base + Σ delta, 0, 100)`
pub fn scenario_score(base_score: f64, flags: &ScenarioFlags) -> f64 {
    clamp_score(base_score + scenario_delta(flags))
}

/// Latest (inflation, growth) shifted by the scenario offsets. The result is
/// a plotting position only; it is not run back through the regime classifier.
pub fn scenario_point(
    latest_inflation: f64,
    latest_growth: f64,
    impact: ScenarioImpact,
) -> (f64, f64) {
    (
        latest_inflation + impact.inflation,
        latest_growth + impact.growth,
    )
}

/// Verbosity of a scenario summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// `Active: A, B.`
    #[default]
    Short,
    /// `Scenario overrides: A, B.`
    Sentence,
    /// `A (desc) · B (desc)`
    Detailed,
}

pub fn scenario_summary(flags: &ScenarioFlags, style: SummaryStyle) -> String {
    let active: Vec<&ScenarioDefinition> = active_definitions(flags).collect();

    if active.is_empty() {
        return match style {
            SummaryStyle::Short => "No overrides.",
            SummaryStyle::Sentence => "Scenario overrides: none.",
            SummaryStyle::Detailed => "No overrides active.",
        }
        .to_string();
    }

    let labels = || active.iter().map(|s| s.label).collect::<Vec<_>>().join(", ");
    match style {
        SummaryStyle::Short => format!("Active: {}.", labels()),
        SummaryStyle::Sentence => format!("Scenario overrides: {}.", labels()),
        SummaryStyle::Detailed => active
            .iter()
            .map(|s| format!("{} ({})", s.label, s.description))
            .collect::<Vec<_>>()
            .join(" · "),
    }
}

/// Everything the presentation layer needs about the active scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub inflation_offset: f64,
    pub growth_offset: f64,
    pub score_delta: f64,
    pub base_score: f64,
    pub scenario_score: f64,
}

pub fn compose(base_score: f64, flags: &ScenarioFlags) -> ScenarioOutcome {
    let impact = scenario_impact(flags);
    let score_delta = scenario_delta(flags);
    ScenarioOutcome {
        inflation_offset: impact.inflation,
        growth_offset: impact.growth,
        score_delta,
        base_score,
        scenario_score: clamp_score(base_score + score_delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_order_matches_ids() {
        for (def, id) in SCENARIO_LIBRARY.iter().zip(ScenarioId::ALL) {
            assert_eq!(def.id, id);
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn test_no_active_scenarios() {
        let flags = ScenarioFlags::all_inactive();
        assert_eq!(scenario_impact(&flags), ScenarioImpact::default());
        assert_eq!(scenario_delta(&flags), 0.0);
        assert_eq!(scenario_score(57.0, &flags), 57.0);
    }

    #[test]
    fn test_summary_styles_when_empty() {
        let flags = ScenarioFlags::new();
        assert_eq!(scenario_summary(&flags, SummaryStyle::Short), "No overrides.");
        assert_eq!(
            scenario_summary(&flags, SummaryStyle::Sentence),
            "Scenario overrides: none."
        );
        assert_eq!(
            scenario_summary(&flags, SummaryStyle::Detailed),
            "No overrides active."
        );
    }

    #[test]
    fn test_summary_styles_with_active() {
        let flags = ScenarioFlags::new()
            .with(ScenarioId::PolicyCut, true)
            .with(ScenarioId::OilShock, true);
        assert_eq!(
            scenario_summary(&flags, SummaryStyle::Short),
            "Active: Oil shock, Policy cut."
        );
        assert_eq!(
            scenario_summary(&flags, SummaryStyle::Sentence),
            "Scenario overrides: Oil shock, Policy cut."
        );
        assert_eq!(
            scenario_summary(&flags, SummaryStyle::Detailed),
            "Oil shock (+inflation, -growth) · Policy cut (-inflation, +growth)"
        );
    }

    #[test]
    fn test_scenario_point_is_offset_only() {
        let impact = ScenarioImpact {
            inflation: 0.4,
            growth: -0.2,
        };
        let (x, y) = scenario_point(3.0, 2.0, impact);
        assert!((x - 3.4).abs() < 1e-12);
        assert!((y - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_compose_floor_clamp() {
        let flags = ScenarioFlags::new()
            .with(ScenarioId::OilShock, true)
            .with(ScenarioId::CreditTightening, true);
        let outcome = compose(4.0, &flags);
        assert_eq!(outcome.score_delta, -11.0);
        assert_eq!(outcome.scenario_score, 0.0);
        assert_eq!(outcome.base_score, 4.0);
    }
}
