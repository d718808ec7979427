//! Static metadata for the indicators the dashboard knows about

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::analytics::DEFAULT_SLOPE_PERIODS;
use crate::model::SeriesCollection;
use crate::model::ids::{
    CORE_PCE, CPI, CREDIT_SPREAD, GDP, PMI, POLICY_RATE, RETAIL_SALES, TEN_YEAR, TWO_YEAR,
    UNEMPLOYMENT, WAGE_GROWTH,
};
use crate::questions::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Monthly,
    Quarterly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub id: &'static str,
    pub label: &'static str,
    /// `%` or `index`
    pub unit: &'static str,
    pub cadence: Cadence,
}

const fn monthly(id: &'static str, label: &'static str, unit: &'static str) -> Indicator {
    Indicator {
        id,
        label,
        unit,
        cadence: Cadence::Monthly,
    }
}

pub static INDICATORS: [Indicator; 11] = [
    monthly(CPI, "CPI Inflation (YoY)", "%"),
    monthly(CORE_PCE, "Core PCE (YoY)", "%"),
    monthly(UNEMPLOYMENT, "Unemployment Rate", "%"),
    monthly(WAGE_GROWTH, "Wage Growth (YoY)", "%"),
    Indicator {
        id: GDP,
        label: "Real GDP (YoY)",
        unit: "%",
        cadence: Cadence::Quarterly,
    },
    monthly(RETAIL_SALES, "Real Retail Sales (YoY)", "%"),
    monthly(PMI, "PMI", "index"),
    monthly(POLICY_RATE, "Policy Rate", "%"),
    monthly(TEN_YEAR, "10Y Yield", "%"),
    monthly(TWO_YEAR, "2Y Yield", "%"),
    monthly(CREDIT_SPREAD, "Credit Spread", "%"),
];

pub fn indicator(id: &str) -> Option<&'static Indicator> {
    INDICATORS.iter().find(|i| i.id == id)
}

/// Display label for a series id, falling back to the id itself
pub fn label_for(id: &str) -> &str {
    indicator(id).map_or(id, |i| i.label)
}

pub fn unit_for(id: &str) -> &'static str {
    indicator(id).map_or("", |i| i.unit)
}

/// One row of the latest-readings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestRow {
    pub indicator: Indicator,
    pub value: Option<f64>,
    pub date: Option<Date>,
    /// Six-period slope, `0.0` without enough data
    pub trend: f64,
    pub status: Status,
}

/// Latest reading and trend for every catalog indicator, in catalog order.
/// Falling readings read as good, rising as a warning.
pub fn latest_table(series: &SeriesCollection) -> Vec<LatestRow> {
    INDICATORS
        .iter()
        .map(|indicator| {
            let s = series.get(indicator.id);
            let latest = s.and_then(|s| s.latest());
            let trend = s.map_or(0.0, |s| s.slope(DEFAULT_SLOPE_PERIODS));
            LatestRow {
                indicator: *indicator,
                value: latest.map(|p| p.value()),
                date: latest.map(|p| p.date()),
                trend,
                status: Status::from_sign(-trend),
            }
        })
        .collect()
}
