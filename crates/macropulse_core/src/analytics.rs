//! Statistical primitives over ordered point slices.
//!
//! Everything here is total: empty or short input yields a defined value
//! (`None`, `0.0` or `0`) rather than a panic. A `0.0` from [`slope`] or
//! [`delta`] can mean either a flat trend or too little data; callers that
//! need to tell the two apart use [`slope_reading`].

use serde::{Deserialize, Serialize};

use crate::date_math::millis_to_days;
use crate::model::Point;

/// Default trailing window for trend slopes
pub const DEFAULT_SLOPE_PERIODS: usize = 6;
/// Default look-back for deltas
pub const DEFAULT_DELTA_STEPS: usize = 3;

/// Last observation, `None` for an empty series
#[inline]
pub fn latest(points: &[Point]) -> Option<&Point> {
    points.last()
}

/// Average per-step change across the trailing `periods` points.
///
/// The window is clamped to the points available; no padding. Returns `0.0`
/// when fewer than two points fall in the window.
pub fn slope(points: &[Point], periods: usize) -> f64 {
    slope_reading(points, periods).value
}

/// Slope plus whether the window held enough points to compute one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeReading {
    pub value: f64,
    pub sufficient: bool,
}

pub fn slope_reading(points: &[Point], periods: usize) -> SlopeReading {
    let window = trailing(points, periods);
    if window.len() < 2 {
        return SlopeReading {
            value: 0.0,
            sufficient: false,
        };
    }
    let start = window[0].value();
    let end = window[window.len() - 1].value();
    SlopeReading {
        value: (end - start) / (window.len() - 1) as f64,
        sufficient: true,
    }
}

/// Change between the last value and the value `steps` positions earlier.
///
/// Index based, not date based. `0.0` when `len <= steps`.
pub fn delta(points: &[Point], steps: usize) -> f64 {
    let len = points.len();
    if len <= steps {
        return 0.0;
    }
    points[len - 1].value() - points[len - 1 - steps].value()
}

/// The last `n` points (or all of them when shorter)
#[inline]
pub fn trailing(points: &[Point], n: usize) -> &[Point] {
    &points[points.len().saturating_sub(n)..]
}

pub fn mean(points: &[Point]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(Point::value).sum::<f64>() / points.len() as f64)
}

/// Population standard deviation
pub fn std_dev(points: &[Point]) -> Option<f64> {
    let mean = mean(points)?;
    let variance = points
        .iter()
        .map(|p| (p.value() - mean).powi(2))
        .sum::<f64>()
        / points.len() as f64;
    Some(variance.sqrt())
}

/// Estimate the observation cadence from the spacing of the last ten points.
///
/// Returns `0` when there is no positive gap to measure, otherwise
/// `round(365 / avg_gap_days)` clamped to `1..=365`.
pub fn points_per_year(points: &[Point]) -> usize {
    if points.len() < 2 {
        return 0;
    }
    let recent = trailing(points, 10);
    let gaps: Vec<i64> = recent
        .windows(2)
        .map(|w| w[1].t() - w[0].t())
        .filter(|gap| *gap > 0)
        .collect();
    if gaps.is_empty() {
        return 0;
    }
    let avg_gap_days = millis_to_days(gaps.iter().sum::<i64>()) / gaps.len() as f64;
    if avg_gap_days <= 0.0 {
        return 0;
    }
    (365.0 / avg_gap_days).round().clamp(1.0, 365.0) as usize
}

/// Last point at or before `t`; the first point when every point is later.
pub fn closest_at_or_before(points: &[Point], t: i64) -> Option<&Point> {
    points
        .iter()
        .take_while(|p| p.t() <= t)
        .last()
        .or_else(|| points.first())
}

/// Latest reading and long-horizon statistics for a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthProfile {
    pub latest: Point,
    /// Mean over roughly the last twenty years
    pub long_run_average: Option<f64>,
    /// Population std-dev over roughly the last ten years
    pub volatility: Option<f64>,
}

const LONG_RUN_YEARS: f64 = 20.0;
const VOLATILITY_YEARS: f64 = 10.0;

/// `None` for an empty series. Window statistics are `None` when the series
/// is shorter than the number of points the horizon calls for.
pub fn growth_profile(points: &[Point]) -> Option<GrowthProfile> {
    let latest = *latest(points)?;
    let ppy = points_per_year(points) as f64;

    Some(GrowthProfile {
        latest,
        long_run_average: horizon(points, ppy, LONG_RUN_YEARS).and_then(mean),
        volatility: horizon(points, ppy, VOLATILITY_YEARS).and_then(std_dev),
    })
}

fn horizon(points: &[Point], points_per_year: f64, years: f64) -> Option<&[Point]> {
    let needed = (points_per_year * years).round() as usize;
    (needed > 0 && points.len() >= needed).then(|| trailing(points, needed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Series;

    fn monthly(values: &[f64]) -> Series {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let year = 2020 + (i / 12) as i16;
                let month = (i % 12) as i8 + 1;
                Point::new(jiff::civil::date(year, month, 1), *v).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_latest_empty() {
        assert!(latest(&[]).is_none());
        let s = monthly(&[1.0, 2.0]);
        assert_eq!(latest(s.points()).map(Point::value), Some(2.0));
    }

    #[test]
    fn test_slope_short_series() {
        assert_eq!(slope(&[], 6), 0.0);
        assert_eq!(slope(monthly(&[4.0]).points(), 6), 0.0);
        assert_eq!(slope(monthly(&[1.0, 3.0]).points(), 1), 0.0);
    }

    #[test]
    fn test_slope_uses_trailing_window() {
        // Last 6 of 8: 3..8 -> (8 - 3) / 5 = 1
        let s = monthly(&[100.0, -50.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(slope(s.points(), 6), 1.0);
    }

    #[test]
    fn test_slope_clamps_to_available_points() {
        let s = monthly(&[2.0, 2.5, 4.0]);
        // Whole series: (4 - 2) / 2
        assert_eq!(slope(s.points(), 6), 1.0);
        assert_eq!(slope(s.points(), 3), 1.0);
    }

    #[test]
    fn test_slope_reading_flags_insufficient() {
        let flat = monthly(&[2.0, 2.0, 2.0]);
        let reading = slope_reading(flat.points(), 6);
        assert_eq!(reading.value, 0.0);
        assert!(reading.sufficient);

        let single = monthly(&[2.0]);
        let reading = slope_reading(single.points(), 6);
        assert_eq!(reading.value, 0.0);
        assert!(!reading.sufficient);
    }

    #[test]
    fn test_delta() {
        let s = monthly(&[1.0, 2.0, 4.0, 7.0]);
        assert_eq!(delta(s.points(), 3), 6.0);
        assert_eq!(delta(s.points(), 1), 3.0);
        assert_eq!(delta(s.points(), 4), 0.0);
        assert_eq!(delta(monthly(&[1.0, 2.0, 3.0]).points(), 3), 0.0);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let s = monthly(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean(s.points()), Some(5.0));
        assert_eq!(std_dev(s.points()), Some(2.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_points_per_year_monthly_and_quarterly() {
        let s = monthly(&[1.0; 24]);
        assert_eq!(points_per_year(s.points()), 12);

        let quarterly = Series::from_pairs([
            ("2023-01-01", 1.0),
            ("2023-04-01", 1.0),
            ("2023-07-01", 1.0),
            ("2023-10-01", 1.0),
            ("2024-01-01", 1.0),
        ])
        .unwrap();
        assert_eq!(points_per_year(quarterly.points()), 4);
    }

    #[test]
    fn test_points_per_year_degenerate() {
        assert_eq!(points_per_year(monthly(&[1.0]).points()), 0);
        let same_day = Series::from_pairs([("2024-01-01", 1.0), ("2024-01-01", 2.0)]).unwrap();
        assert_eq!(points_per_year(same_day.points()), 0);
    }

    #[test]
    fn test_closest_at_or_before() {
        let s = Series::from_pairs([("2024-01-01", 1.0), ("2024-02-01", 2.0), ("2024-03-01", 3.0)])
            .unwrap();
        let feb15 = Point::parse("2024-02-15", 0.0).unwrap().t();
        assert_eq!(closest_at_or_before(s.points(), feb15).map(Point::value), Some(2.0));

        let early = Point::parse("2023-06-01", 0.0).unwrap().t();
        assert_eq!(closest_at_or_before(s.points(), early).map(Point::value), Some(1.0));

        assert!(closest_at_or_before(&[], early).is_none());
    }

    #[test]
    fn test_growth_profile_requires_history() {
        let short = monthly(&[2.0, 2.2, 2.4]);
        let profile = growth_profile(short.points()).unwrap();
        assert_eq!(profile.latest.value(), 2.4);
        assert!(profile.long_run_average.is_none());
        assert!(profile.volatility.is_none());

        assert!(growth_profile(&[]).is_none());
    }

    #[test]
    fn test_growth_profile_windows() {
        // 12 years monthly: enough for the 10y window (120 points), not 20y (240)
        let values: Vec<f64> = (0..144).map(|i| if i % 2 == 0 { 1.0 } else { 3.0 }).collect();
        let s = monthly(&values);
        let profile = growth_profile(s.points()).unwrap();
        assert!(profile.long_run_average.is_none());
        let vol = profile.volatility.unwrap();
        assert!((vol - 1.0).abs() < 1e-12);
    }
}
