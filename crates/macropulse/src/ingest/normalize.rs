//! Normalization of loosely shaped JSON payloads into a [`Series`].
//!
//! Accepted shapes:
//! - an array of `[date, value]` pairs or of objects with date/value keys
//! - an object wrapping one of the above under a known key
//! - a plain object mapping dates to numbers or numeric strings
//!
//! Points that cannot be read are dropped; the result is sorted by time.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use macropulse_core::{Point, Series};
use serde_json::{Map, Value};

/// Wrapper keys, checked in order; the first truthy one is unwrapped
const WRAPPER_KEYS: [&str; 6] = ["series", "data", "results", "result", "observations", "items"];
const DATE_KEYS: [&str; 6] = ["date", "period", "time", "timestamp", "month", "quarter"];
const VALUE_KEYS: [&str; 7] = ["value", "v", "rate", "yoy", "index", "level", "close"];

/// Numeric dates above this are epoch milliseconds, at or below epoch seconds
const MILLIS_THRESHOLD: f64 = 1e12;

pub fn normalize_series(payload: &Value) -> Series {
    match payload {
        Value::Array(items) => normalize_array(items),
        Value::Object(map) => {
            if let Some(inner) = WRAPPER_KEYS
                .iter()
                .filter_map(|key| map.get(*key))
                .find(|v| is_truthy(v))
            {
                return normalize_series(inner);
            }
            map.iter()
                .filter(|(_, v)| v.is_number() || v.is_string())
                .filter_map(|(date, value)| create_point(&Value::String(date.clone()), value))
                .collect()
        }
        _ => Series::default(),
    }
}

fn normalize_array(items: &[Value]) -> Series {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Array(pair) => create_point(pair.first()?, pair.get(1)?),
            Value::Object(obj) => {
                create_point(pick(obj, &DATE_KEYS)?, pick(obj, &VALUE_KEYS)?)
            }
            _ => None,
        })
        .collect()
}

/// Value under the first key present, even when that value is null
fn pick<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn create_point(date_raw: &Value, value_raw: &Value) -> Option<Point> {
    let value = parse_value(value_raw)?;
    match date_raw {
        Value::Number(n) => {
            let raw = n.as_f64().filter(|f| f.is_finite() && *f != 0.0)?;
            let millis = if raw > MILLIS_THRESHOLD { raw } else { raw * 1000.0 };
            let date = Timestamp::from_millisecond(millis as i64)
                .ok()?
                .to_zoned(TimeZone::UTC)
                .date();
            Point::new(date, value).ok()
        }
        Value::String(s) if !s.is_empty() => Point::parse(&complete_date(s), value).ok(),
        _ => None,
    }
}

fn parse_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Expand `YYYY` and `YYYY-MM` to the first day of the period
fn complete_date(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    match bytes.len() {
        4 if digits(0..4) => format!("{raw}-01-01"),
        7 if digits(0..4) && bytes[4] == b'-' && digits(5..7) => format!("{raw}-01"),
        _ => raw.to_string(),
    }
}
