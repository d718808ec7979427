use std::fmt;

/// Errors raised while building a [`Point`](crate::model::Point).
///
/// The analytics never see these: a point that fails construction is dropped
/// by the ingestion layer before a series is assembled.
#[derive(Debug, Clone)]
pub enum PointError {
    /// Observation value is NaN or infinite
    NonFiniteValue(f64),
    /// Date string could not be parsed as a calendar day
    InvalidDate { raw: String, source: jiff::Error },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NonFiniteValue(v) => write!(f, "observation value {v} is not finite"),
            PointError::InvalidDate { raw, source } => {
                write!(f, "invalid observation date {raw:?}: {source}")
            }
        }
    }
}

impl std::error::Error for PointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PointError::InvalidDate { source, .. } => Some(source),
            PointError::NonFiniteValue(_) => None,
        }
    }
}

/// Errors raised when parsing identifiers supplied by a caller
/// (CLI flags, preference files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    UnknownScenario(String),
    UnknownWeight(String),
    UnknownQuestion(String),
    UnknownTransaction(String),
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdError::UnknownScenario(name) => write!(f, "unknown scenario {name:?}"),
            ParseIdError::UnknownWeight(name) => write!(f, "unknown weight category {name:?}"),
            ParseIdError::UnknownQuestion(name) => write!(f, "unknown question {name:?}"),
            ParseIdError::UnknownTransaction(name) => write!(f, "unknown transaction {name:?}"),
        }
    }
}

impl std::error::Error for ParseIdError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_non_finite_display() {
        let err = PointError::NonFiniteValue(f64::NAN);
        assert_eq!(err.to_string(), "observation value NaN is not finite");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_date_has_source() {
        let source = "2024-13-40".parse::<jiff::civil::Date>().unwrap_err();
        let err = PointError::InvalidDate {
            raw: "2024-13-40".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid observation date \"2024-13-40\""));
        assert!(err.source().is_some());
    }
}
