//! Display formatting shared by answers, narratives and reports

use jiff::civil::Date;

/// Placeholder for a value that is not available
pub const MISSING: &str = "--";

/// Format an indicator reading with its unit.
///
/// Magnitudes of 100 or more drop decimals; `index` units get no suffix.
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return MISSING.to_string();
    };
    let rounded = if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    };
    if unit == "index" {
        rounded
    } else {
        format!("{rounded}{unit}")
    }
}

/// Format a change with an explicit `+` for positive values
pub fn format_signed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return MISSING.to_string();
    }
    if value > 0.0 {
        format!("+{value:.decimals$}")
    } else {
        format!("{value:.decimals$}")
    }
}

/// Format a fixed-precision number without sign decoration
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => format!("{v:.decimals$}"),
        None => MISSING.to_string(),
    }
}

/// Short human date, e.g. `Mar 1, 2024`
pub fn format_date(date: Option<Date>) -> String {
    match date {
        Some(d) => d.strftime("%b %-d, %Y").to_string(),
        None => MISSING.to_string(),
    }
}
