//! Full snapshots over small fixed collections

use crate::dashboard::evaluate;
use crate::model::{DriverKind, ScenarioFlags, ScenarioId, Series, SeriesCollection, WeightConfig};
use crate::questions::{QuestionId, Status};
use crate::regime::{Regime, RegimeLabel};

fn single(value: f64) -> Series {
    Series::from_pairs([("2024-01-01", value)]).unwrap()
}

#[test]
fn test_single_point_collection() {
    let series = SeriesCollection::new()
        .with("cpi", single(3.5))
        .with("unemployment", single(4.0))
        .with("gdp", single(2.6));

    let snapshot = evaluate(&series, &WeightConfig::default(), &ScenarioFlags::new());

    // A single point has zero slope: inflation takes the "not falling"
    // branch (-8), labor the "not rising" branch (+8), growth >= 2.5 (+12)
    assert_eq!(snapshot.score, 62.0);
    assert_eq!(snapshot.drivers.len(), 3);

    let impact_of = |kind: DriverKind| {
        snapshot
            .drivers
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.impact)
            .unwrap()
    };
    assert_eq!(impact_of(DriverKind::Inflation), -8.0);
    assert_eq!(impact_of(DriverKind::Labor), 8.0);
    assert_eq!(impact_of(DriverKind::Growth), 12.0);
    assert_eq!(snapshot.drivers[0].kind, DriverKind::Growth);

    assert_eq!(snapshot.regime.label, RegimeLabel::Overheating);
    assert_eq!(snapshot.score_note, "Balanced");
    assert_eq!(snapshot.scenario.scenario_score, 62.0);
    assert_eq!(snapshot.scenario_summaries.short, "No overrides.");
}

#[test]
fn test_empty_collection() {
    let snapshot = evaluate(
        &SeriesCollection::new(),
        &WeightConfig::default(),
        &ScenarioFlags::all_inactive(),
    );

    assert_eq!(snapshot.score, 50.0);
    assert!(snapshot.drivers.is_empty());
    assert_eq!(snapshot.regime.label, RegimeLabel::Transition);
    assert_eq!(snapshot.regime, Regime::INSUFFICIENT_DATA);
    assert!(snapshot.regime.insufficient_data);
    assert!(snapshot.regime_map.is_none());
    for card in &snapshot.questions {
        assert_eq!(card.answer.status, Status::Neutral, "{:?}", card.id);
    }
}

#[test]
fn test_scenarios_shift_score_not_drivers() {
    let series = SeriesCollection::new()
        .with("cpi", single(3.5))
        .with("unemployment", single(4.0))
        .with("gdp", single(2.6));
    let weights = WeightConfig::default();

    let base = evaluate(&series, &weights, &ScenarioFlags::new());
    let shocked = evaluate(
        &series,
        &weights,
        &ScenarioFlags::new().with(ScenarioId::OilShock, true),
    );

    assert_eq!(base.score, shocked.score);
    assert_eq!(base.drivers, shocked.drivers);
    assert_eq!(base.regime, shocked.regime);
    assert_eq!(shocked.scenario.scenario_score, 56.0);

    let map = shocked.regime_map.unwrap();
    let point = map.scenario.unwrap();
    assert!((point.inflation - 3.9).abs() < 1e-12);
    assert!((point.growth - 2.4).abs() < 1e-12);
}

#[test]
fn test_weights_flow_through_snapshot() {
    let series = SeriesCollection::new()
        .with("cpi", single(3.5))
        .with("unemployment", single(4.0))
        .with("gdp", single(2.6));
    let weights = WeightConfig::default()
        .with(crate::model::WeightCategory::Growth, 0.0)
        .with(crate::model::WeightCategory::Inflation, 2.0);

    let snapshot = evaluate(&series, &weights, &ScenarioFlags::new());
    // 50 - 16 + 8 + 0
    assert_eq!(snapshot.score, 42.0);
    // Zero-weighted drivers stay in the breakdown
    assert_eq!(snapshot.drivers.len(), 3);
    assert_eq!(snapshot.drivers[0].kind, DriverKind::Inflation);
    assert_eq!(snapshot.questions.len(), QuestionId::ALL.len());
}
