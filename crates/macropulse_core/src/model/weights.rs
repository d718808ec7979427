use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{ScenarioId, WeightCategory};

/// Per-category multipliers applied to driver impacts.
///
/// Values are taken as given: negative weights invert a driver and nothing
/// is clamped or validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub inflation: f64,
    pub labor: f64,
    pub growth: f64,
    pub curve: f64,
    pub credit: f64,
    pub demand: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            inflation: 1.0,
            labor: 1.0,
            growth: 1.0,
            curve: 1.0,
            credit: 1.0,
            demand: 1.0,
        }
    }
}

impl WeightConfig {
    pub fn get(&self, category: WeightCategory) -> f64 {
        match category {
            WeightCategory::Inflation => self.inflation,
            WeightCategory::Labor => self.labor,
            WeightCategory::Growth => self.growth,
            WeightCategory::Curve => self.curve,
            WeightCategory::Credit => self.credit,
            WeightCategory::Demand => self.demand,
        }
    }

    pub fn set(&mut self, category: WeightCategory, value: f64) {
        let slot = match category {
            WeightCategory::Inflation => &mut self.inflation,
            WeightCategory::Labor => &mut self.labor,
            WeightCategory::Growth => &mut self.growth,
            WeightCategory::Curve => &mut self.curve,
            WeightCategory::Credit => &mut self.credit,
            WeightCategory::Demand => &mut self.demand,
        };
        *slot = value;
    }

    #[must_use]
    pub fn with(mut self, category: WeightCategory, value: f64) -> Self {
        self.set(category, value);
        self
    }
}

/// Active state for each scenario in the library. Missing entries are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioFlags {
    flags: BTreeMap<ScenarioId, bool>,
}

impl ScenarioFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags with every scenario explicitly inactive
    pub fn all_inactive() -> Self {
        ScenarioId::ALL.into_iter().map(|id| (id, false)).collect()
    }

    pub fn set(&mut self, id: ScenarioId, active: bool) {
        self.flags.insert(id, active);
    }

    #[must_use]
    pub fn with(mut self, id: ScenarioId, active: bool) -> Self {
        self.set(id, active);
        self
    }

    pub fn is_active(&self, id: ScenarioId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Active scenarios in library order
    pub fn active(&self) -> impl Iterator<Item = ScenarioId> + '_ {
        self.flags
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| *id)
    }

    pub fn any_active(&self) -> bool {
        self.active().next().is_some()
    }
}

impl FromIterator<(ScenarioId, bool)> for ScenarioFlags {
    fn from_iter<I: IntoIterator<Item = (ScenarioId, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
