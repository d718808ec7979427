//! The question board: five fixed diagnostic questions answered from the
//! current series collection, plus the statistics behind each deep dive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{label_for, unit_for};
use crate::error::ParseIdError;
use crate::format::{format_date, format_signed, format_value};
use crate::model::ids::{
    CORE_PCE, CPI, CREDIT_SPREAD, GDP, INFLATION_SERIES, PMI, RETAIL_SALES, TEN_YEAR, TWO_YEAR,
    UNEMPLOYMENT, WAGE_GROWTH,
};
use crate::model::{Series, SeriesCollection};
use crate::scoring::curve_spread;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Warn,
    Neutral,
}

impl Status {
    /// Positive → good, negative → warn, zero → neutral
    pub fn from_sign(value: f64) -> Self {
        if value > 0.0 {
            Status::Good
        } else if value < 0.0 {
            Status::Warn
        } else {
            Status::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Good => "On track",
            Status::Warn => "Watch",
            Status::Neutral => "Neutral",
        }
    }
}

/// Answer card for one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub title: String,
    pub status: Status,
    pub footnote: String,
}

impl Answer {
    fn new(title: &str, status: Status, footnote: String) -> Self {
        Self {
            title: title.to_string(),
            status,
            footnote,
        }
    }

    /// Placeholder while a question's sources are missing
    pub fn waiting() -> Self {
        Self::new("Waiting on data", Status::Neutral, "Connect a live series".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    InflationTrend,
    LaborHeat,
    GrowthMomentum,
    Curve,
    Risk,
}

impl QuestionId {
    pub const ALL: [QuestionId; 5] = [
        QuestionId::InflationTrend,
        QuestionId::LaborHeat,
        QuestionId::GrowthMomentum,
        QuestionId::Curve,
        QuestionId::Risk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::InflationTrend => "inflation_trend",
            QuestionId::LaborHeat => "labor_heat",
            QuestionId::GrowthMomentum => "growth_momentum",
            QuestionId::Curve => "curve",
            QuestionId::Risk => "risk",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            QuestionId::InflationTrend => "Is inflation cooling or re-accelerating?",
            QuestionId::LaborHeat => "Is the labor market loosening?",
            QuestionId::GrowthMomentum => "Is growth holding above stall speed?",
            QuestionId::Curve => "Is the yield curve still inverted?",
            QuestionId::Risk => "Are credit conditions tightening?",
        }
    }

    /// Series shown in the deep dive
    pub fn sources(self) -> &'static [&'static str] {
        match self {
            QuestionId::InflationTrend => &[CPI, CORE_PCE],
            QuestionId::LaborHeat => &[UNEMPLOYMENT, WAGE_GROWTH],
            QuestionId::GrowthMomentum => &[GDP, PMI, RETAIL_SALES],
            QuestionId::Curve => &[TEN_YEAR, TWO_YEAR],
            QuestionId::Risk => &[CREDIT_SPREAD],
        }
    }

    pub fn answer(self, series: &SeriesCollection) -> Answer {
        let answer = match self {
            QuestionId::InflationTrend => inflation_trend(series),
            QuestionId::LaborHeat => labor_heat(series),
            QuestionId::GrowthMomentum => growth_momentum(series),
            QuestionId::Curve => curve(series),
            QuestionId::Risk => risk(series),
        };
        answer.unwrap_or_else(Answer::waiting)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        QuestionId::ALL
            .into_iter()
            .find(|q| q.as_str() == normalized)
            .ok_or_else(|| ParseIdError::UnknownQuestion(s.to_string()))
    }
}

fn inflation_trend(series: &SeriesCollection) -> Option<Answer> {
    let inflation = series.first_present(&INFLATION_SERIES)?;
    let slope = inflation.slope(6);
    let latest = inflation.latest()?;

    let title = if slope < -0.02 {
        "Cooling"
    } else if slope > 0.02 {
        "Re-accelerating"
    } else {
        "Holding steady"
    };
    Some(Answer::new(
        title,
        Status::from_sign(-slope),
        format!(
            "{} as of {}",
            format_value(Some(latest.value()), "%"),
            format_date(Some(latest.date()))
        ),
    ))
}

fn labor_heat(series: &SeriesCollection) -> Option<Answer> {
    let unemployment = series.present(UNEMPLOYMENT)?;
    let slope = unemployment.slope(6);

    let title = if slope > 0.03 {
        "Loosening"
    } else if slope < -0.02 {
        "Tightening"
    } else {
        "Stable"
    };
    let status = if slope > 0.0 { Status::Warn } else { Status::Good };
    Some(Answer::new(
        title,
        status,
        format!(
            "{} unemployment, 6m trend {} pts",
            format_value(unemployment.latest_value(), "%"),
            format_signed(slope, 2)
        ),
    ))
}

fn growth_momentum(series: &SeriesCollection) -> Option<Answer> {
    let gdp = series.present(GDP).and_then(Series::latest_value)?;

    let title = if gdp >= 2.5 {
        "Above trend"
    } else if gdp >= 1.0 {
        "Below trend"
    } else {
        "At risk"
    };
    let status = if gdp >= 2.0 {
        Status::Good
    } else if gdp >= 1.0 {
        Status::Neutral
    } else {
        Status::Warn
    };
    Some(Answer::new(
        title,
        status,
        format!("Real GDP {} YoY", format_value(Some(gdp), "%")),
    ))
}

fn curve(series: &SeriesCollection) -> Option<Answer> {
    let spread = curve_spread(series)?;
    let (title, status) = if spread < 0.0 {
        ("Inverted", Status::Warn)
    } else {
        ("Positive", Status::Good)
    };
    Some(Answer::new(
        title,
        status,
        format!("10Y-2Y spread {} pts", format_signed(spread, 2)),
    ))
}

fn risk(series: &SeriesCollection) -> Option<Answer> {
    let spread = series.present(CREDIT_SPREAD)?;
    let slope = spread.slope(4);

    let title = if slope > 0.03 {
        "Tightening"
    } else if slope < -0.02 {
        "Easing"
    } else {
        "Stable"
    };
    let status = if slope > 0.0 { Status::Warn } else { Status::Good };
    Some(Answer::new(
        title,
        status,
        format!(
            "Spread {}, 4m change {} pts",
            format_value(spread.latest_value(), "%"),
            format_signed(slope, 2)
        ),
    ))
}

/// Answers for every question, in board order
pub fn answer_all(series: &SeriesCollection) -> Vec<(QuestionId, Answer)> {
    QuestionId::ALL
        .into_iter()
        .map(|q| (q, q.answer(series)))
        .collect()
}

/// Latest reading and recent changes for one deep-dive source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    pub id: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub latest: f64,
    pub change_3: f64,
    pub change_6: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepDive {
    pub question: QuestionId,
    pub prompt: &'static str,
    pub narrative: String,
    /// Only sources with data
    pub stats: Vec<SourceStats>,
}

pub fn deep_dive(question: QuestionId, series: &SeriesCollection) -> DeepDive {
    let answer = question.answer(series);
    let narrative = format!("{}. {}", answer.title, answer.footnote)
        .trim()
        .to_string();

    let stats = question
        .sources()
        .iter()
        .filter_map(|&id| {
            let s = series.present(id)?;
            Some(SourceStats {
                id,
                label: label_for(id),
                unit: unit_for(id),
                latest: s.latest_value()?,
                change_3: s.delta(3),
                change_6: s.delta(6),
            })
        })
        .collect();

    DeepDive {
        question,
        prompt: question.prompt(),
        narrative,
        stats,
    }
}
