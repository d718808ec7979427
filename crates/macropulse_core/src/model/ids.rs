//! Identifiers for indicator series, scenarios, weights and drivers
//!
//! Series names stay plain strings (the collection is keyed by whatever the
//! ingestion layer supplies); everything else is a closed enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

pub const CPI: &str = "cpi";
pub const CORE_PCE: &str = "core_pce";
pub const UNEMPLOYMENT: &str = "unemployment";
pub const WAGE_GROWTH: &str = "wage_growth";
pub const GDP: &str = "gdp";
pub const RETAIL_SALES: &str = "retail_sales";
pub const PMI: &str = "pmi";
pub const POLICY_RATE: &str = "policy_rate";
pub const TEN_YEAR: &str = "ten_year";
pub const TWO_YEAR: &str = "two_year";
pub const CREDIT_SPREAD: &str = "credit_spread";

/// Inflation gauges in preference order: headline CPI, then Core PCE.
pub const INFLATION_SERIES: [&str; 2] = [CPI, CORE_PCE];

/// Named macro shock in the scenario library
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    OilShock,
    PolicyCut,
    CreditTightening,
    DemandSurge,
}

impl ScenarioId {
    /// Library order
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::OilShock,
        ScenarioId::PolicyCut,
        ScenarioId::CreditTightening,
        ScenarioId::DemandSurge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::OilShock => "oil_shock",
            ScenarioId::PolicyCut => "policy_cut",
            ScenarioId::CreditTightening => "credit_tightening",
            ScenarioId::DemandSurge => "demand_surge",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ParseIdError::UnknownScenario(s.to_string()))
    }
}

/// Weight multiplier slot. PMI and retail demand share `Demand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCategory {
    Inflation,
    Labor,
    Growth,
    Curve,
    Credit,
    Demand,
}

impl WeightCategory {
    pub const ALL: [WeightCategory; 6] = [
        WeightCategory::Inflation,
        WeightCategory::Labor,
        WeightCategory::Growth,
        WeightCategory::Curve,
        WeightCategory::Credit,
        WeightCategory::Demand,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightCategory::Inflation => "inflation",
            WeightCategory::Labor => "labor",
            WeightCategory::Growth => "growth",
            WeightCategory::Curve => "curve",
            WeightCategory::Credit => "credit",
            WeightCategory::Demand => "demand",
        }
    }
}

impl FromStr for WeightCategory {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        WeightCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseIdError::UnknownWeight(s.to_string()))
    }
}

/// One row of the score decomposition, in scoring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverKind {
    Inflation,
    Labor,
    Growth,
    Curve,
    Credit,
    PmiDemand,
    RetailDemand,
}

impl DriverKind {
    pub fn label(self) -> &'static str {
        match self {
            DriverKind::Inflation => "Inflation trend",
            DriverKind::Labor => "Labor momentum",
            DriverKind::Growth => "Growth level",
            DriverKind::Curve => "Curve shape",
            DriverKind::Credit => "Credit stress",
            DriverKind::PmiDemand => "PMI demand",
            DriverKind::RetailDemand => "Retail demand",
        }
    }

    pub fn weight_category(self) -> WeightCategory {
        match self {
            DriverKind::Inflation => WeightCategory::Inflation,
            DriverKind::Labor => WeightCategory::Labor,
            DriverKind::Growth => WeightCategory::Growth,
            DriverKind::Curve => WeightCategory::Curve,
            DriverKind::Credit => WeightCategory::Credit,
            DriverKind::PmiDemand | DriverKind::RetailDemand => WeightCategory::Demand,
        }
    }
}
