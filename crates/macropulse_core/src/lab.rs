//! Teaching calculators for the macro lab panel.
//!
//! Each function is a small closed-form model driven by user inputs rather
//! than by loaded series. Inputs that are NaN read as zero, matching how the
//! dashboard treats blank fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;
use crate::format::{format_number, format_signed};

fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

// ============================================================================
// Business cycle
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    Expansion,
    Peak,
    Contraction,
    Trough,
}

impl CyclePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            CyclePhase::Expansion => "Expansion",
            CyclePhase::Peak => "Peak",
            CyclePhase::Contraction => "Contraction",
            CyclePhase::Trough => "Trough",
        }
    }
}

/// Phase and direction of travel for an output gap / momentum pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReading {
    pub phase: CyclePhase,
    /// `rising` below potential, `falling` otherwise
    pub unemployment_trend: &'static str,
    /// `rising`, `cooling` or `steady`
    pub inflation_momentum: &'static str,
    /// Horizontal plot position in percent; the gap axis spans -4..4
    pub plot_x: f64,
    /// Vertical plot position in percent from the top; momentum spans -3..3
    pub plot_y: f64,
}

impl CycleReading {
    pub fn summary(&self) -> String {
        format!(
            "Phase: {}. Unemployment trend: {}. Inflation momentum: {}.",
            self.phase.as_str(),
            self.unemployment_trend,
            self.inflation_momentum
        )
    }
}

pub fn business_cycle(output_gap: f64, momentum: f64) -> CycleReading {
    let gap = or_zero(output_gap);
    let momentum = or_zero(momentum);

    let phase = match (gap >= 0.0, momentum >= 0.0) {
        (true, true) => CyclePhase::Expansion,
        (true, false) => CyclePhase::Peak,
        (false, false) => CyclePhase::Contraction,
        (false, true) => CyclePhase::Trough,
    };
    let inflation_momentum = if momentum > 0.1 {
        "rising"
    } else if momentum < -0.1 {
        "cooling"
    } else {
        "steady"
    };

    CycleReading {
        phase,
        unemployment_trend: if gap < 0.0 { "rising" } else { "falling" },
        inflation_momentum,
        plot_x: ((gap + 4.0) / 8.0 * 100.0).clamp(0.0, 100.0),
        plot_y: ((1.0 - (momentum + 3.0) / 6.0) * 100.0).clamp(0.0, 100.0),
    }
}

// ============================================================================
// Policy rate shock
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateStance {
    Tightening,
    Easing,
    Neutral,
}

impl RateStance {
    pub fn as_str(self) -> &'static str {
        match self {
            RateStance::Tightening => "Tightening",
            RateStance::Easing => "Easing",
            RateStance::Neutral => "Neutral",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            RateStance::Tightening => {
                "Tightening impulse. Expect softer durables and capex with a 2-4 quarter lag."
            }
            RateStance::Easing => {
                "Easing impulse. Expect a lift in credit-sensitive demand with lags."
            }
            RateStance::Neutral => "Neutral stance. Watch incoming data for the next move.",
        }
    }
}

/// Demand impulses in percentage points from a policy rate move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateShock {
    pub bps: f64,
    pub investment: f64,
    pub consumption: f64,
    /// Investment and consumption blended 35/65
    pub gdp: f64,
    pub stance: RateStance,
}

impl RateShock {
    pub fn summary(&self) -> String {
        format!(
            "Investment impulse: {} pp · Consumption impulse: {} pp · GDP impulse: {} pp",
            format_signed(self.investment, 2),
            format_signed(self.consumption, 2),
            format_signed(self.gdp, 2)
        )
    }

    /// e.g. `Easing: Easing impulse. ...`
    pub fn note(&self) -> String {
        format!("{}: {}", self.stance.as_str(), self.stance.guidance())
    }
}

pub fn rate_shock(bps: f64) -> RateShock {
    let bps = or_zero(bps);
    let change = bps / 100.0;

    // Adding 0.0 folds a -0.0 impulse into 0.0
    let investment = -0.7 * change + 0.0;
    let consumption = -0.3 * change + 0.0;
    let gdp = investment * 0.35 + consumption * 0.65;

    let stance = if change > 0.0 {
        RateStance::Tightening
    } else if change < 0.0 {
        RateStance::Easing
    } else {
        RateStance::Neutral
    };

    RateShock {
        bps,
        investment,
        consumption,
        gdp,
        stance,
    }
}

// ============================================================================
// Saving identities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Y - T - C
    pub private: f64,
    /// T - G
    pub public: f64,
    /// Y - C - G
    pub national: f64,
}

pub fn savings(income: f64, consumption: f64, government: f64, taxes: f64) -> Savings {
    let (y, c, g, t) = (
        or_zero(income),
        or_zero(consumption),
        or_zero(government),
        or_zero(taxes),
    );
    Savings {
        private: y - t - c,
        public: t - g,
        national: y - c - g,
    }
}

// ============================================================================
// Cobb-Douglas production
// ============================================================================

pub const DEFAULT_ALPHA: f64 = 0.33;
pub const ALPHA_RANGE: (f64, f64) = (0.05, 0.95);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub output: f64,
    /// Zero when labor is zero
    pub per_worker: f64,
    /// Capital share actually used after defaulting and clamping
    pub alpha: f64,
}

/// `Y = A · K^α · L^(1-α)`. A zero or NaN `alpha` falls back to
/// [`DEFAULT_ALPHA`].
pub fn production(productivity: f64, capital: f64, labor: f64, alpha: f64) -> Production {
    let (a, k, l) = (or_zero(productivity), or_zero(capital), or_zero(labor));
    let alpha = if alpha.is_nan() || alpha == 0.0 {
        DEFAULT_ALPHA
    } else {
        alpha
    };
    let alpha = alpha.clamp(ALPHA_RANGE.0, ALPHA_RANGE.1);

    let output = a * k.powf(alpha) * l.powf(1.0 - alpha);
    Production {
        output,
        per_worker: if l != 0.0 { output / l } else { 0.0 },
        alpha,
    }
}

// ============================================================================
// GDP three ways
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorAccount {
    pub sales: f64,
    pub inputs: f64,
}

impl SectorAccount {
    pub fn value_added(&self) -> f64 {
        or_zero(self.sales) - or_zero(self.inputs)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeSide {
    pub wages: f64,
    pub profits: f64,
    pub taxes: f64,
    pub depreciation: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenditureSide {
    pub consumption: f64,
    pub investment: f64,
    pub government: f64,
    pub exports: f64,
    pub imports: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalAccounts {
    /// Agriculture, manufacturing and services in the classroom example
    pub sectors: Vec<SectorAccount>,
    pub income: IncomeSide,
    pub expenditure: ExpenditureSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdpMeasures {
    pub value_added: f64,
    pub income: f64,
    pub expenditure: f64,
    /// Spread between the largest and smallest measure
    pub discrepancy: f64,
}

impl GdpMeasures {
    pub fn summary(&self) -> String {
        format!(
            "Statistical discrepancy (max-min): {}",
            format_number(Some(self.discrepancy), 2)
        )
    }
}

impl NationalAccounts {
    pub fn measures(&self) -> GdpMeasures {
        let value_added: f64 = self.sectors.iter().map(SectorAccount::value_added).sum();

        let i = &self.income;
        let income: f64 = [i.wages, i.profits, i.taxes, i.depreciation]
            .into_iter()
            .map(or_zero)
            .sum();

        let e = &self.expenditure;
        let expenditure = or_zero(e.consumption)
            + or_zero(e.investment)
            + or_zero(e.government)
            + (or_zero(e.exports) - or_zero(e.imports));

        let measures = [value_added, income, expenditure];
        let max = measures.into_iter().fold(f64::NEG_INFINITY, f64::max);
        let min = measures.into_iter().fold(f64::INFINITY, f64::min);

        GdpMeasures {
            value_added,
            income,
            expenditure,
            discrepancy: max - min,
        }
    }
}

// ============================================================================
// Nominal vs real output
// ============================================================================

/// Quantity and price of the single good for one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub quantity: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflatorRow {
    pub nominal: f64,
    /// Quantity valued at base-period prices
    pub real: f64,
    /// Zero when real output is zero
    pub deflator: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflatorTable {
    pub rows: Vec<DeflatorRow>,
    /// Real growth over the last period, in percent
    pub real_growth: f64,
    /// Deflator inflation over the last period, in percent
    pub inflation: f64,
}

/// Build the nominal/real/deflator table. The first period is the base year.
/// Growth and inflation compare the last two periods and are zero when the
/// earlier value is zero or there is only one period.
pub fn deflator_table(periods: &[Basket]) -> DeflatorTable {
    let base_price = periods.first().map_or(0.0, |b| or_zero(b.price));

    let rows: Vec<DeflatorRow> = periods
        .iter()
        .map(|b| {
            let (q, p) = (or_zero(b.quantity), or_zero(b.price));
            let nominal = q * p;
            let real = q * base_price;
            DeflatorRow {
                nominal,
                real,
                deflator: if real != 0.0 { nominal / real * 100.0 } else { 0.0 },
            }
        })
        .collect();

    let (real_growth, inflation) = match rows.as_slice() {
        [.., prev, last] => (
            percent_change(prev.real, last.real),
            percent_change(prev.deflator, last.deflator),
        ),
        _ => (0.0, 0.0),
    };

    DeflatorTable {
        rows,
        real_growth,
        inflation,
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from != 0.0 { (to - from) / from * 100.0 } else { 0.0 }
}

// ============================================================================
// Transaction classifier
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GdpComponent {
    #[serde(rename = "C")]
    Consumption,
    #[serde(rename = "I")]
    Investment,
    #[serde(rename = "G")]
    Government,
    #[serde(rename = "NX")]
    NetExports,
}

impl GdpComponent {
    pub fn symbol(self) -> &'static str {
        match self {
            GdpComponent::Consumption => "C",
            GdpComponent::Investment => "I",
            GdpComponent::Government => "G",
            GdpComponent::NetExports => "NX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transaction {
    Haircut,
    Mustang,
    OldHouse,
    NewHouse,
    Fridge,
}

/// Where a transaction lands in expenditure GDP
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransactionEntry {
    pub id: Transaction,
    pub label: &'static str,
    pub components: &'static [GdpComponent],
    pub note: &'static str,
}

pub static TRANSACTION_LIBRARY: [TransactionEntry; 5] = [
    TransactionEntry {
        id: Transaction::Haircut,
        label: "Haircut",
        components: &[GdpComponent::Consumption],
        note: "Personal services are final consumption; they land in C immediately.",
    },
    TransactionEntry {
        id: Transaction::Mustang,
        label: "Mustang from last year's inventory",
        components: &[GdpComponent::Consumption, GdpComponent::Investment],
        note: "Final sale counts in C, inventory falls so I decreases (net GDP unchanged vs production period).",
    },
    TransactionEntry {
        id: Transaction::OldHouse,
        label: "Existing house",
        components: &[],
        note: "Existing assets do not add to GDP; only broker fees/services would.",
    },
    TransactionEntry {
        id: Transaction::NewHouse,
        label: "Newly built house",
        components: &[GdpComponent::Investment],
        note: "New residential construction is investment.",
    },
    TransactionEntry {
        id: Transaction::Fridge,
        label: "Domestic fridge",
        components: &[GdpComponent::Consumption],
        note: "Household durable purchase is consumption; domestic production keeps NX unchanged.",
    },
];

/// Shown when no transaction is selected
pub const NO_TRANSACTION_NOTE: &str = "Select a transaction.";

impl Transaction {
    pub const ALL: [Transaction; 5] = [
        Transaction::Haircut,
        Transaction::Mustang,
        Transaction::OldHouse,
        Transaction::NewHouse,
        Transaction::Fridge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Transaction::Haircut => "haircut",
            Transaction::Mustang => "mustang",
            Transaction::OldHouse => "old_house",
            Transaction::NewHouse => "new_house",
            Transaction::Fridge => "fridge",
        }
    }

    pub fn entry(self) -> &'static TransactionEntry {
        // The library holds one entry per variant in declaration order
        &TRANSACTION_LIBRARY[self as usize]
    }

    pub fn counts_in(self, component: GdpComponent) -> bool {
        self.entry().components.contains(&component)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transaction {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Transaction::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseIdError::UnknownTransaction(s.to_string()))
    }
}

/// Components and note for a selection, or the prompt when nothing matches
pub fn classify_transaction(
    selection: Option<Transaction>,
) -> (&'static [GdpComponent], &'static str) {
    match selection {
        Some(t) => (t.entry().components, t.entry().note),
        None => (&[], NO_TRANSACTION_NOTE),
    }
}
