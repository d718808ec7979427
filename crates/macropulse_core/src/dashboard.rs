//! One refresh cycle's worth of derived output.
//!
//! `evaluate` runs every component once over a fully materialized collection
//! and returns a plain serializable snapshot. Nothing is cached between calls.

use serde::Serialize;

use crate::analytics::{GrowthProfile, growth_profile};
use crate::catalog::{LatestRow, latest_table};
use crate::model::ids::GDP;
use crate::model::{ScenarioFlags, SeriesCollection, WeightConfig};
use crate::narrative::{Call, Pulse, build_call, score_note};
use crate::questions::{Answer, QuestionId, answer_all};
use crate::regime::{Regime, RegimeMap, compute_regime, regime_map};
use crate::scenario::{ScenarioOutcome, SummaryStyle, compose, scenario_impact, scenario_summary};
use crate::scoring::{Driver, rank_drivers, score_components, score_from_drivers};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummaries {
    pub short: String,
    pub sentence: String,
    pub detailed: String,
}

impl ScenarioSummaries {
    pub fn new(flags: &ScenarioFlags) -> Self {
        Self {
            short: scenario_summary(flags, SummaryStyle::Short),
            sentence: scenario_summary(flags, SummaryStyle::Sentence),
            detailed: scenario_summary(flags, SummaryStyle::Detailed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCard {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub score: f64,
    pub score_note: &'static str,
    pub pulse: Pulse,
    /// Ranked by absolute impact
    pub drivers: Vec<Driver>,
    pub regime: Regime,
    pub scenario: ScenarioOutcome,
    pub scenario_summaries: ScenarioSummaries,
    pub regime_map: Option<RegimeMap>,
    pub call: Call,
    pub questions: Vec<QuestionCard>,
    pub latest: Vec<LatestRow>,
    pub growth: Option<GrowthProfile>,
}

impl DashboardSnapshot {
    /// First `n` ranked drivers
    pub fn top_drivers(&self, n: usize) -> &[Driver] {
        &self.drivers[..n.min(self.drivers.len())]
    }
}

pub fn evaluate(
    series: &SeriesCollection,
    weights: &WeightConfig,
    flags: &ScenarioFlags,
) -> DashboardSnapshot {
    let components = score_components(series, weights);
    let score = score_from_drivers(&components);
    let regime = compute_regime(series);

    let questions = answer_all(series)
        .into_iter()
        .map(|(id, answer)| QuestionCard {
            id,
            prompt: id.prompt(),
            answer,
        })
        .collect();

    DashboardSnapshot {
        score,
        score_note: score_note(score),
        pulse: Pulse::from_score(score),
        drivers: rank_drivers(components),
        regime,
        scenario: compose(score, flags),
        scenario_summaries: ScenarioSummaries::new(flags),
        regime_map: regime_map(series, scenario_impact(flags)),
        call: build_call(score, &regime, series, flags),
        questions,
        latest: latest_table(series),
        growth: series.present(GDP).and_then(|s| growth_profile(s.points())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScenarioId, Series};
    use crate::regime::RegimeLabel;

    #[test]
    fn test_evaluate_empty() {
        let snapshot = evaluate(
            &SeriesCollection::new(),
            &WeightConfig::default(),
            &ScenarioFlags::all_inactive(),
        );
        assert_eq!(snapshot.score, 50.0);
        assert!(snapshot.drivers.is_empty());
        assert_eq!(snapshot.regime, Regime::INSUFFICIENT_DATA);
        assert!(snapshot.regime_map.is_none());
        assert!(snapshot.growth.is_none());
        assert_eq!(snapshot.score_note, "Balanced");
        assert_eq!(snapshot.scenario.scenario_score, 50.0);
        assert_eq!(snapshot.questions.len(), 5);
        assert_eq!(snapshot.top_drivers(3).len(), 0);
    }

    #[test]
    fn test_evaluate_consistent_with_components() {
        let series = SeriesCollection::new()
            .with(
                "cpi",
                Series::from_pairs([("2024-01-01", 2.9), ("2024-02-01", 2.7)]).unwrap(),
            )
            .with("gdp", Series::from_pairs([("2024-01-01", 2.6)]).unwrap());
        let flags = ScenarioFlags::new().with(ScenarioId::DemandSurge, true);
        let snapshot = evaluate(&series, &WeightConfig::default(), &flags);

        // 50 + 12 (falling inflation) + 12 (growth)
        assert_eq!(snapshot.score, 74.0);
        assert_eq!(snapshot.regime.label, RegimeLabel::Goldilocks);
        assert_eq!(snapshot.scenario.scenario_score, 79.0);
        assert_eq!(snapshot.scenario_summaries.short, "Active: Demand surge.");
        assert!(snapshot.regime_map.as_ref().unwrap().scenario.is_some());
        assert_eq!(snapshot.top_drivers(1).len(), 1);
        assert!(snapshot.growth.is_some());
    }
}
