//! Calendar units accepted by arithmetic and difference operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QenError;

/// A calendar or clock unit.
///
/// Parsed case-insensitively, singular or plural: `"day"`, `"Days"`, `"DAYS"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// Singular lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = QenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "year" => Ok(Unit::Year),
            "month" => Ok(Unit::Month),
            "week" => Ok(Unit::Week),
            "day" => Ok(Unit::Day),
            "hour" => Ok(Unit::Hour),
            "minute" => Ok(Unit::Minute),
            "second" => Ok(Unit::Second),
            "millisecond" => Ok(Unit::Millisecond),
            _ => Err(QenError::InvalidUnit(format!("'{}'", s.trim()))),
        }
    }
}

/// What a difference computation should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiffUnit {
    /// A single integer for one unit.
    Unit(Unit),
    /// The full [`CalendarDifference`](crate::diff::CalendarDifference) record.
    #[default]
    All,
}

impl From<Unit> for DiffUnit {
    fn from(unit: Unit) -> Self {
        DiffUnit::Unit(unit)
    }
}

impl FromStr for DiffUnit {
    type Err = QenError;

    /// `"all"` or an empty string selects [`DiffUnit::All`]; anything else must
    /// parse as a [`Unit`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(DiffUnit::All);
        }
        trimmed.parse().map(DiffUnit::Unit)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_singular_and_plural() {
        assert_eq!("day".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("days".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("Months".parse::<Unit>().unwrap(), Unit::Month);
        assert_eq!("MILLISECONDS".parse::<Unit>().unwrap(), Unit::Millisecond);
        assert_eq!(" year ".parse::<Unit>().unwrap(), Unit::Year);
    }

    #[test]
    fn test_parse_unknown_unit_is_error() {
        let err = "fortnight".parse::<Unit>().unwrap_err();
        assert_eq!(err, QenError::InvalidUnit("'fortnight'".to_string()));
        assert!("".parse::<Unit>().is_err());
        assert!("s".parse::<Unit>().is_err());
    }

    #[test]
    fn test_parse_diff_unit() {
        assert_eq!("all".parse::<DiffUnit>().unwrap(), DiffUnit::All);
        assert_eq!("ALL".parse::<DiffUnit>().unwrap(), DiffUnit::All);
        assert_eq!("".parse::<DiffUnit>().unwrap(), DiffUnit::All);
        assert_eq!(
            "hours".parse::<DiffUnit>().unwrap(),
            DiffUnit::Unit(Unit::Hour)
        );
        assert!("eons".parse::<DiffUnit>().is_err());
    }

    #[test]
    fn test_display_is_singular() {
        assert_eq!(Unit::Millisecond.to_string(), "millisecond");
        assert_eq!(
            serde_json::to_string(&Unit::Week).unwrap(),
            "\"week\""
        );
    }
}
