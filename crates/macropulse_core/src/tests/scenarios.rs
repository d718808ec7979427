//! Scenario composition over every subset of the library

use crate::model::{ScenarioFlags, ScenarioId};
use crate::scenario::{
    SCENARIO_LIBRARY, compose, scenario_delta, scenario_impact, scenario_score,
};

/// Every on/off combination of the four library scenarios
fn all_subsets() -> impl Iterator<Item = ScenarioFlags> {
    (0u8..16).map(|mask| {
        ScenarioId::ALL
            .iter()
            .enumerate()
            .map(|(bit, id)| (*id, mask & (1 << bit) != 0))
            .collect()
    })
}

#[test]
fn test_deltas_are_additive() {
    for flags in all_subsets() {
        let expected: f64 = ScenarioId::ALL
            .iter()
            .filter(|id| flags.is_active(**id))
            .map(|id| id.definition().score_delta)
            .sum();
        assert_eq!(scenario_delta(&flags), expected);

        let impact = scenario_impact(&flags);
        let inflation: f64 = flags.active().map(|id| id.definition().inflation_offset).sum();
        let growth: f64 = flags.active().map(|id| id.definition().growth_offset).sum();
        assert!((impact.inflation - inflation).abs() < 1e-12);
        assert!((impact.growth - growth).abs() < 1e-12);
    }
}

#[test]
fn test_all_active_sums_library() {
    let flags: ScenarioFlags = ScenarioId::ALL.iter().map(|id| (*id, true)).collect();
    let total: f64 = SCENARIO_LIBRARY.iter().map(|s| s.score_delta).sum();
    assert_eq!(total, -2.0);
    assert_eq!(scenario_delta(&flags), total);
    assert_eq!(scenario_score(60.0, &flags), 58.0);
}

#[test]
fn test_upper_clamp() {
    let flags = ScenarioFlags::new()
        .with(ScenarioId::PolicyCut, true)
        .with(ScenarioId::DemandSurge, true);
    let outcome = compose(98.0, &flags);
    assert_eq!(outcome.score_delta, 9.0);
    assert_eq!(outcome.scenario_score, 100.0);
    assert_eq!(outcome.base_score, 98.0);
}

#[test]
fn test_scenario_score_always_bounded() {
    for flags in all_subsets() {
        for base in [0.0, 3.0, 50.0, 97.0, 100.0] {
            let score = scenario_score(base, &flags);
            assert!((0.0..=100.0).contains(&score), "base={base} score={score}");
        }
    }
}

#[test]
fn test_inactive_flags_do_not_count() {
    let flags = ScenarioFlags::new()
        .with(ScenarioId::OilShock, true)
        .with(ScenarioId::OilShock, false)
        .with(ScenarioId::CreditTightening, true);
    assert_eq!(scenario_delta(&flags), -5.0);
    assert_eq!(flags.active().collect::<Vec<_>>(), vec![ScenarioId::CreditTightening]);
}
