//! Observations, series and the named collection the engine scores

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::date_math::epoch_millis;
use crate::error::PointError;

/// One dated observation of an indicator.
///
/// `t` is always the UTC-midnight epoch milliseconds of `date`; it is derived
/// at construction and recomputed on deserialization, never trusted from input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointRecord")]
pub struct Point {
    date: Date,
    value: f64,
    t: i64,
}

/// Wire shape accepted when deserializing a [`Point`]. A supplied `t` is an
/// unknown field and is skipped.
#[derive(Deserialize)]
struct PointRecord {
    date: Date,
    value: f64,
}

impl TryFrom<PointRecord> for Point {
    type Error = PointError;

    fn try_from(record: PointRecord) -> Result<Self, Self::Error> {
        Point::new(record.date, record.value)
    }
}

impl Point {
    pub fn new(date: Date, value: f64) -> Result<Self, PointError> {
        if !value.is_finite() {
            return Err(PointError::NonFiniteValue(value));
        }
        Ok(Self {
            date,
            value,
            t: epoch_millis(date),
        })
    }

    /// Parse a point from a date string. Only the first ten characters are
    /// read, so full timestamps like `2024-03-01T12:00:00Z` resolve to their day.
    pub fn parse(date: &str, value: f64) -> Result<Self, PointError> {
        let day = date.get(..10).unwrap_or(date);
        let parsed = day
            .parse::<Date>()
            .map_err(|source| PointError::InvalidDate {
                raw: date.to_string(),
                source,
            })?;
        Point::new(parsed, value)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Epoch milliseconds
    pub fn t(&self) -> i64 {
        self.t
    }
}

/// Ordered observations of one indicator, ascending by `t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Series {
    points: Vec<Point>,
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Series::from_points(points)
    }
}

impl From<Series> for Vec<Point> {
    fn from(series: Series) -> Self {
        series.points
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Series::from_points(iter.into_iter().collect())
    }
}

impl Series {
    /// Build a series, stable-sorting by `t`. Duplicate days are kept.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.sort_by_key(Point::t);
        Self { points }
    }

    /// Build a series from `(date, value)` pairs, failing on the first bad point.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, PointError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        pairs
            .into_iter()
            .map(|(date, value)| Point::parse(date, value))
            .collect::<Result<Vec<_>, _>>()
            .map(Series::from_points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&Point> {
        analytics::latest(&self.points)
    }

    /// Latest value, or `None` for an empty series
    pub fn latest_value(&self) -> Option<f64> {
        self.latest().map(Point::value)
    }

    pub fn slope(&self, periods: usize) -> f64 {
        analytics::slope(&self.points, periods)
    }

    pub fn delta(&self, steps: usize) -> f64 {
        analytics::delta(&self.points, steps)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Named series supplied fresh on every refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesCollection {
    series: FxHashMap<String, Series>,
}

impl SeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, series: Series) -> Option<Series> {
        self.series.insert(name.into(), series)
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, series: Series) -> Self {
        self.insert(name, series);
        self
    }

    /// Raw lookup; an empty series is still returned.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Lookup that treats an empty series the same as a missing one.
    pub fn present(&self, name: &str) -> Option<&Series> {
        self.series.get(name).filter(|s| !s.is_empty())
    }

    /// First present series from a preference-ordered list of names.
    pub fn first_present(&self, names: &[&str]) -> Option<&Series> {
        names.iter().find_map(|name| self.present(name))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Series)> for SeriesCollection {
    fn from_iter<I: IntoIterator<Item = (S, Series)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
