//! Regime classification from the latest inflation and growth readings.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::analytics::closest_at_or_before;
use crate::model::ids::{GDP, INFLATION_SERIES};
use crate::model::{Series, SeriesCollection};
use crate::scenario::{ScenarioImpact, scenario_point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegimeLabel {
    Goldilocks,
    Overheating,
    Stagflation,
    Disinflation,
    Transition,
}

impl RegimeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RegimeLabel::Goldilocks => "Goldilocks",
            RegimeLabel::Overheating => "Overheating",
            RegimeLabel::Stagflation => "Stagflation",
            RegimeLabel::Disinflation => "Disinflation",
            RegimeLabel::Transition => "Transition",
        }
    }
}

impl fmt::Display for RegimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified regime with its display copy.
///
/// `Transition` has two variants of copy: "mixed signals" when both readings
/// exist but no rule matched, and "insufficient data" when either is missing.
/// `insufficient_data` records which one applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Regime {
    pub label: RegimeLabel,
    pub note: &'static str,
    pub insight: &'static str,
    pub insufficient_data: bool,
}

impl Regime {
    const fn new(label: RegimeLabel, note: &'static str, insight: &'static str) -> Self {
        Self {
            label,
            note,
            insight,
            insufficient_data: false,
        }
    }

    pub const INSUFFICIENT_DATA: Regime = Regime {
        label: RegimeLabel::Transition,
        note: "Need CPI + GDP",
        insight: "Connect CPI and GDP to classify the regime.",
        insufficient_data: true,
    };

    pub const GOLDILOCKS: Regime = Regime::new(
        RegimeLabel::Goldilocks,
        "Solid growth, cooling inflation",
        "Demand is holding without overheating.",
    );

    pub const OVERHEATING: Regime = Regime::new(
        RegimeLabel::Overheating,
        "Above trend + sticky inflation",
        "Policy risk stays elevated while demand runs hot.",
    );

    pub const STAGFLATION: Regime = Regime::new(
        RegimeLabel::Stagflation,
        "Soft growth, high inflation",
        "Policy choices remain painful as growth softens.",
    );

    pub const DISINFLATION: Regime = Regime::new(
        RegimeLabel::Disinflation,
        "Below trend + cooling prices",
        "Soft landing risk rises but pressure is easing.",
    );

    pub const MIXED_SIGNALS: Regime = Regime::new(
        RegimeLabel::Transition,
        "Mixed signals",
        "Momentum is mixed across growth and inflation.",
    );
}

/// Decision table, first match wins. `None` on either side yields the
/// insufficient-data transition.
pub fn classify(inflation: Option<f64>, growth: Option<f64>) -> Regime {
    let (Some(inflation), Some(growth)) = (inflation, growth) else {
        return Regime::INSUFFICIENT_DATA;
    };

    if growth >= 2.2 && inflation <= 3.0 {
        Regime::GOLDILOCKS
    } else if growth >= 2.0 && inflation > 3.0 {
        Regime::OVERHEATING
    } else if growth < 1.2 && inflation > 3.0 {
        Regime::STAGFLATION
    } else if growth < 1.2 && inflation <= 3.0 {
        Regime::DISINFLATION
    } else {
        Regime::MIXED_SIGNALS
    }
}

fn inflation_series(series: &SeriesCollection) -> Option<&Series> {
    series.first_present(&INFLATION_SERIES)
}

/// Classify from the latest CPI (or Core PCE) and GDP readings
pub fn compute_regime(series: &SeriesCollection) -> Regime {
    classify(
        inflation_series(series).and_then(Series::latest_value),
        series.present(GDP).and_then(Series::latest_value),
    )
}

/// One (inflation, growth) position on the regime map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimePoint {
    pub inflation: f64,
    pub growth: f64,
    pub date: Date,
}

/// Pair every growth observation with the inflation reading in force on its date.
pub fn regime_trajectory(inflation: &Series, growth: &Series) -> Vec<RegimePoint> {
    growth
        .iter()
        .filter_map(|g| {
            closest_at_or_before(inflation.points(), g.t()).map(|i| RegimePoint {
                inflation: i.value(),
                growth: g.value(),
                date: g.date(),
            })
        })
        .collect()
}

/// History, current position and optional scenario position for plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeMap {
    pub trajectory: Vec<RegimePoint>,
    pub current: RegimePoint,
    /// Present only while some scenario shifts the position
    pub scenario: Option<RegimePoint>,
    pub note: String,
}

/// `None` while CPI/Core PCE or GDP is unavailable
pub fn regime_map(series: &SeriesCollection, impact: ScenarioImpact) -> Option<RegimeMap> {
    let inflation = inflation_series(series)?;
    let growth = series.present(GDP)?;

    let trajectory = regime_trajectory(inflation, growth);
    let current = *trajectory.last()?;

    let scenario = (!impact.is_zero()).then(|| {
        let (inflation, growth) = scenario_point(current.inflation, current.growth, impact);
        RegimePoint {
            inflation,
            growth,
            date: current.date,
        }
    });

    let current_note = format!(
        "Current: {:.2}% inflation, {:.2}% growth.",
        current.inflation, current.growth
    );
    let scenario_note = match &scenario {
        Some(p) => format!(
            "Scenario: {:.2}% infl, {:.2}% growth.",
            p.inflation, p.growth
        ),
        None => "No scenario overrides.".to_string(),
    };

    Some(RegimeMap {
        trajectory,
        current,
        scenario,
        note: format!("{current_note} {scenario_note}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table() {
        assert_eq!(classify(Some(2.5), Some(2.4)).label, RegimeLabel::Goldilocks);
        assert_eq!(classify(Some(3.5), Some(2.1)).label, RegimeLabel::Overheating);
        assert_eq!(classify(Some(3.5), Some(1.0)).label, RegimeLabel::Stagflation);
        assert_eq!(classify(Some(2.0), Some(0.5)).label, RegimeLabel::Disinflation);
        assert_eq!(classify(Some(3.5), Some(1.5)).label, RegimeLabel::Transition);
    }

    #[test]
    fn test_classify_boundaries_inclusive() {
        assert_eq!(classify(Some(3.0), Some(2.2)).label, RegimeLabel::Goldilocks);
        assert_eq!(classify(Some(3.01), Some(2.0)).label, RegimeLabel::Overheating);
        // 2.0 <= growth < 2.2 with low inflation matches nothing
        assert_eq!(classify(Some(3.0), Some(2.0)), Regime::MIXED_SIGNALS);
        assert_eq!(classify(Some(3.0), Some(1.2)), Regime::MIXED_SIGNALS);
        assert_eq!(classify(Some(3.0), Some(1.19)).label, RegimeLabel::Disinflation);
    }

    #[test]
    fn test_two_transition_messages() {
        let missing = classify(None, Some(2.0));
        let mixed = classify(Some(3.5), Some(1.5));
        assert_eq!(missing.label, mixed.label);
        assert_ne!(missing.note, mixed.note);
        assert!(missing.insufficient_data);
        assert!(!mixed.insufficient_data);
        assert_eq!(classify(Some(2.0), None), Regime::INSUFFICIENT_DATA);
    }

    #[test]
    fn test_trajectory_pairs_by_date() {
        let cpi = Series::from_pairs([
            ("2024-01-01", 3.1),
            ("2024-02-01", 3.0),
            ("2024-03-01", 2.9),
            ("2024-04-01", 2.8),
        ])
        .unwrap();
        let gdp = Series::from_pairs([("2023-10-01", 2.0), ("2024-03-31", 2.4)]).unwrap();

        let trajectory = regime_trajectory(&cpi, &gdp);
        assert_eq!(trajectory.len(), 2);
        // Before any CPI point: falls back to the first reading
        assert_eq!(trajectory[0].inflation, 3.1);
        assert_eq!(trajectory[1].inflation, 2.9);
        assert_eq!(trajectory[1].growth, 2.4);
    }

    #[test]
    fn test_regime_map_scenario_point() {
        let series = SeriesCollection::new()
            .with("cpi", Series::from_pairs([("2024-01-01", 3.0)]).unwrap())
            .with("gdp", Series::from_pairs([("2024-01-01", 2.0)]).unwrap());

        let map = regime_map(&series, ScenarioImpact::default()).unwrap();
        assert!(map.scenario.is_none());
        assert_eq!(
            map.note,
            "Current: 3.00% inflation, 2.00% growth. No scenario overrides."
        );

        let shocked = regime_map(
            &series,
            ScenarioImpact {
                inflation: 0.4,
                growth: -0.2,
            },
        )
        .unwrap();
        let p = shocked.scenario.unwrap();
        assert!((p.inflation - 3.4).abs() < 1e-12);
        assert!((p.growth - 1.8).abs() < 1e-12);
        assert!(shocked.note.ends_with("Scenario: 3.40% infl, 1.80% growth."));
    }

    #[test]
    fn test_regime_map_needs_both_series() {
        let series =
            SeriesCollection::new().with("cpi", Series::from_pairs([("2024-01-01", 3.0)]).unwrap());
        assert!(regime_map(&series, ScenarioImpact::default()).is_none());
    }
}
