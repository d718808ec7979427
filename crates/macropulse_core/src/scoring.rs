//! Composite macro score.
//!
//! Seven fixed rules each turn one indicator into a signed impact, scaled by
//! the weight of its category. The score is 50 plus the sum of impacts,
//! clamped to `[0, 100]`. Indicators without data contribute no driver.

use serde::Serialize;

use crate::model::ids::{
    CREDIT_SPREAD, GDP, INFLATION_SERIES, PMI, RETAIL_SALES, TEN_YEAR, TWO_YEAR, UNEMPLOYMENT,
};
use crate::model::{DriverKind, SeriesCollection, WeightConfig};

/// Score before any indicator adjusts it
pub const NEUTRAL_SCORE: f64 = 50.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

const TREND_PERIODS: usize = 6;
const CREDIT_PERIODS: usize = 4;

/// One indicator's weighted contribution to the score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Driver {
    pub kind: DriverKind,
    pub label: &'static str,
    pub impact: f64,
}

impl Driver {
    fn weighted(kind: DriverKind, base_impact: f64, weights: &WeightConfig) -> Self {
        Self {
            kind,
            label: kind.label(),
            impact: base_impact * weights.get(kind.weight_category()),
        }
    }
}

#[inline]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Drivers in fixed category order, one per indicator with data.
pub fn score_components(series: &SeriesCollection, weights: &WeightConfig) -> Vec<Driver> {
    let mut drivers = Vec::with_capacity(7);

    if let Some(inflation) = series.first_present(&INFLATION_SERIES) {
        let base = if inflation.slope(TREND_PERIODS) < 0.0 { 12.0 } else { -8.0 };
        drivers.push(Driver::weighted(DriverKind::Inflation, base, weights));
    }

    if let Some(unemployment) = series.present(UNEMPLOYMENT) {
        let base = if unemployment.slope(TREND_PERIODS) > 0.0 { -10.0 } else { 8.0 };
        drivers.push(Driver::weighted(DriverKind::Labor, base, weights));
    }

    if let Some(gdp) = series.present(GDP).and_then(|s| s.latest_value()) {
        let base = if gdp >= 2.5 {
            12.0
        } else if gdp >= 1.5 {
            6.0
        } else {
            -8.0
        };
        drivers.push(Driver::weighted(DriverKind::Growth, base, weights));
    }

    if let Some(spread) = curve_spread(series) {
        let base = if spread > 0.0 { 6.0 } else { -6.0 };
        drivers.push(Driver::weighted(DriverKind::Curve, base, weights));
    }

    if let Some(credit) = series.present(CREDIT_SPREAD) {
        let base = if credit.slope(CREDIT_PERIODS) > 0.0 { -5.0 } else { 4.0 };
        drivers.push(Driver::weighted(DriverKind::Credit, base, weights));
    }

    if let Some(pmi) = series.present(PMI).and_then(|s| s.latest_value()) {
        let base = if pmi >= 50.0 { 4.0 } else { -4.0 };
        drivers.push(Driver::weighted(DriverKind::PmiDemand, base, weights));
    }

    if let Some(retail) = series.present(RETAIL_SALES).and_then(|s| s.latest_value()) {
        let base = if retail >= 2.0 { 4.0 } else { -2.0 };
        drivers.push(Driver::weighted(DriverKind::RetailDemand, base, weights));
    }

    drivers
}

/// Latest 10Y minus latest 2Y, when both are present
pub fn curve_spread(series: &SeriesCollection) -> Option<f64> {
    let ten = series.present(TEN_YEAR)?.latest_value()?;
    let two = series.present(TWO_YEAR)?.latest_value()?;
    Some(ten - two)
}

/// `clamp(50 + Σ impact, 0, 100)`
pub fn macro_score(series: &SeriesCollection, weights: &WeightConfig) -> f64 {
    score_from_drivers(&score_components(series, weights))
}

pub fn score_from_drivers(drivers: &[Driver]) -> f64 {
    clamp_score(NEUTRAL_SCORE + drivers.iter().map(|d| d.impact).sum::<f64>())
}

/// Drivers ranked by `|impact|`, largest first. Ties keep category order.
pub fn score_drivers(series: &SeriesCollection, weights: &WeightConfig) -> Vec<Driver> {
    rank_drivers(score_components(series, weights))
}

pub fn rank_drivers(mut drivers: Vec<Driver>) -> Vec<Driver> {
    drivers.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    drivers
}

pub fn top_drivers(series: &SeriesCollection, weights: &WeightConfig, n: usize) -> Vec<Driver> {
    let mut drivers = score_drivers(series, weights);
    drivers.truncate(n);
    drivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Series;

    fn single(value: f64) -> Series {
        Series::from_pairs([("2024-01-01", value)]).unwrap()
    }

    fn trend(values: &[f64]) -> Series {
        let dates = [
            "2024-01-01",
            "2024-02-01",
            "2024-03-01",
            "2024-04-01",
            "2024-05-01",
            "2024-06-01",
            "2024-07-01",
        ];
        Series::from_pairs(dates.iter().copied().zip(values.iter().copied())).unwrap()
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(108.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }

    #[test]
    fn test_falling_inflation_scores_positive() {
        let series = SeriesCollection::new().with("cpi", trend(&[4.0, 3.8, 3.5, 3.3]));
        let drivers = score_components(&series, &WeightConfig::default());
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].kind, DriverKind::Inflation);
        assert_eq!(drivers[0].impact, 12.0);
    }

    #[test]
    fn test_core_pce_fallback() {
        let series = SeriesCollection::new()
            .with("cpi", Series::default())
            .with("core_pce", trend(&[2.5, 2.7]));
        let drivers = score_components(&series, &WeightConfig::default());
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].impact, -8.0);
    }

    #[test]
    fn test_growth_thresholds_inclusive() {
        let weights = WeightConfig::default();
        for (gdp, expected) in [(2.5, 12.0), (2.49, 6.0), (1.5, 6.0), (1.49, -8.0)] {
            let series = SeriesCollection::new().with("gdp", single(gdp));
            assert_eq!(score_components(&series, &weights)[0].impact, expected, "gdp={gdp}");
        }
    }

    #[test]
    fn test_curve_requires_both_legs() {
        let weights = WeightConfig::default();
        let only_ten = SeriesCollection::new().with("ten_year", single(4.2));
        assert!(score_components(&only_ten, &weights).is_empty());

        let inverted = only_ten.clone().with("two_year", single(4.6));
        let drivers = score_components(&inverted, &weights);
        assert_eq!(drivers[0].kind, DriverKind::Curve);
        assert_eq!(drivers[0].impact, -6.0);

        let flat = SeriesCollection::new()
            .with("ten_year", single(4.0))
            .with("two_year", single(4.0));
        assert_eq!(score_components(&flat, &weights)[0].impact, -6.0);
    }

    #[test]
    fn test_credit_uses_four_period_window() {
        // Last 4: 1.0, 1.1, 1.2, 1.3 -> widening
        let series = SeriesCollection::new()
            .with("credit_spread", trend(&[3.0, 2.0, 1.0, 1.1, 1.2, 1.3]));
        let drivers = score_components(&series, &WeightConfig::default());
        assert_eq!(drivers[0].impact, -5.0);
    }

    #[test]
    fn test_demand_drivers_share_weight() {
        let weights = WeightConfig {
            demand: 0.5,
            ..Default::default()
        };
        let series = SeriesCollection::new()
            .with("pmi", single(49.9))
            .with("retail_sales", single(2.0));
        let drivers = score_components(&series, &weights);
        assert_eq!(drivers[0].kind, DriverKind::PmiDemand);
        assert_eq!(drivers[0].impact, -2.0);
        assert_eq!(drivers[1].kind, DriverKind::RetailDemand);
        assert_eq!(drivers[1].impact, 2.0);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let series = SeriesCollection::new()
            .with("pmi", single(55.0))
            .with("retail_sales", single(3.0))
            .with("gdp", single(1.0));
        let ranked = score_drivers(&series, &WeightConfig::default());
        let kinds: Vec<_> = ranked.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DriverKind::Growth, DriverKind::PmiDemand, DriverKind::RetailDemand]
        );
    }

    #[test]
    fn test_top_drivers_truncates() {
        let series = SeriesCollection::new()
            .with("pmi", single(55.0))
            .with("gdp", single(3.0))
            .with("unemployment", trend(&[4.0, 4.2]));
        let top = top_drivers(&series, &WeightConfig::default(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].kind, DriverKind::Growth);
        assert_eq!(top[1].kind, DriverKind::Labor);
    }
}
