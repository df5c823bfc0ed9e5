//! Raw input → validated numeric date components.
//!
//! Date strings take the shape `YEAR[-MONTH[-DAY]][ HOUR[:MINUTE[:SECOND]][.MILLIS]]`.
//! Any of `-`, `/`, `.` or `,` separates the date parts, and a space or `T`
//! separates date from time. Missing month and day default to 1; a missing
//! time defaults to 0:00:00.000 on the calendar's own clock.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::QenError;

static DATE_STRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<year>-?\d{1,6})
        (?: [-/.,] (?P<month>\d{1,2})
            (?: [-/.,] (?P<day>\d{1,2}) )?
        )?
        (?: [\ T]+ (?P<hour>\d{1,2})
            (?: : (?P<minute>\d{1,2}) )?
            (?: : (?P<second>\d{1,2}) )?
            (?: \. (?P<millis>\d{1,3}) )?
        )?$",
    )
    .unwrap()
});

/// Numeric date and time fields, before any calendar conversion.
///
/// Months are 1-based in both calendars. For Ethiopian dates `hours` is on
/// the Ethiopian 12-hour clock (0–11); for Gregorian dates it is 0–23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    pub year: i32,
    #[serde(default = "first")]
    pub month: u32,
    #[serde(default = "first")]
    pub day: u32,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
    #[serde(default)]
    pub milliseconds: u32,
}

fn first() -> u32 {
    1
}

impl DateComponents {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
        }
    }

    /// Replace the time-of-day fields.
    pub fn with_time(self, hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            ..self
        }
    }

    /// Deserialize components from a JSON object such as
    /// `{"year": 2016, "month": 13, "day": 5}`.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidInput`] if the JSON is malformed, `year` is
    /// missing, or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, QenError> {
        serde_json::from_str(json).map_err(|e| QenError::InvalidInput(format!("'{json}': {e}")))
    }
}

impl From<(i32, u32, u32)> for DateComponents {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<(i32, u32, u32, u32, u32, u32, u32)> for DateComponents {
    fn from(
        (year, month, day, hours, minutes, seconds, milliseconds): (i32, u32, u32, u32, u32, u32, u32),
    ) -> Self {
        Self::new(year, month, day).with_time(hours, minutes, seconds, milliseconds)
    }
}

/// What a date value can be built from.
///
/// `D` is the date type being built; [`DateInput::Existing`] copies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput<D> {
    /// A Gregorian civil instant.
    Instant(NaiveDateTime),
    /// Numeric fields in the target calendar.
    Components(DateComponents),
    /// A date string in the target calendar.
    Text(String),
    /// An already-built date.
    Existing(D),
}

impl<D> From<NaiveDateTime> for DateInput<D> {
    fn from(instant: NaiveDateTime) -> Self {
        DateInput::Instant(instant)
    }
}

impl<D> From<DateComponents> for DateInput<D> {
    fn from(components: DateComponents) -> Self {
        DateInput::Components(components)
    }
}

impl<D> From<(i32, u32, u32)> for DateInput<D> {
    fn from(ymd: (i32, u32, u32)) -> Self {
        DateInput::Components(ymd.into())
    }
}

impl<D> From<(i32, u32, u32, u32, u32, u32, u32)> for DateInput<D> {
    fn from(fields: (i32, u32, u32, u32, u32, u32, u32)) -> Self {
        DateInput::Components(fields.into())
    }
}

impl<D> From<&str> for DateInput<D> {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl<D> From<String> for DateInput<D> {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Split a date string into components without range checks.
fn split_date_string(text: &str) -> Result<DateComponents, QenError> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(QenError::InvalidInput("empty date string".to_string()));
    }

    let caps = DATE_STRING_RE
        .captures(&normalized)
        .ok_or_else(|| QenError::InvalidInput(format!("cannot parse date string '{normalized}'")))?;

    let field = |name: &str, default: u32| -> Result<u32, QenError> {
        caps.name(name).map_or(Ok(default), |m| {
            m.as_str()
                .parse()
                .map_err(|_| QenError::InvalidInput(format!("invalid {name} in '{normalized}'")))
        })
    };

    let year = caps["year"]
        .parse()
        .map_err(|_| QenError::InvalidInput(format!("invalid year in '{normalized}'")))?;

    Ok(DateComponents {
        year,
        month: field("month", 1)?,
        day: field("day", 1)?,
        hours: field("hour", 0)?,
        minutes: field("minute", 0)?,
        seconds: field("second", 0)?,
        // A fraction of a second: ".5" is 500 ms.
        milliseconds: caps.name("millis").map_or(Ok(0), |m| {
            format!("{:0<3}", m.as_str())
                .parse()
                .map_err(|_| QenError::InvalidInput(format!("invalid millisecond in '{normalized}'")))
        })?,
    })
}

/// Parse and validate an Ethiopian date string.
///
/// # Errors
///
/// [`QenError::InvalidInput`] for malformed text,
/// [`QenError::UnrepresentableDate`] for fields out of range.
///
/// # Examples
///
/// ```
/// use qen::parse::parse_ethiopian;
///
/// let c = parse_ethiopian("2014-07-08 3:30").unwrap();
/// assert_eq!((c.year, c.month, c.day, c.hours, c.minutes), (2014, 7, 8, 3, 30));
/// assert!(parse_ethiopian("2016-13-06").is_err());
/// ```
pub fn parse_ethiopian(text: &str) -> Result<DateComponents, QenError> {
    let components = split_date_string(text)?;
    validate_ethiopian(&components)?;
    Ok(components)
}

/// Parse a Gregorian date string into a host-local civil instant.
///
/// RFC 3339 strings with an explicit offset (including `Z`) are converted to
/// the host's local time. Everything else is read as local civil time.
///
/// # Errors
///
/// [`QenError::InvalidInput`] for malformed text,
/// [`QenError::UnrepresentableDate`] for fields out of range.
pub fn parse_gregorian(text: &str) -> Result<NaiveDateTime, QenError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text.trim()) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    let components = split_date_string(text)?;
    gregorian_instant(&components)
}

// ── Validation ──────────────────────────────────────────────────────────────

fn check_range(name: &str, value: u32, max: u32) -> Result<(), QenError> {
    if value > max {
        return Err(QenError::UnrepresentableDate(format!(
            "{name} {value} is outside 0-{max}"
        )));
    }
    Ok(())
}

fn validate_time(components: &DateComponents, max_hour: u32) -> Result<(), QenError> {
    check_range("hour", components.hours, max_hour)?;
    check_range("minute", components.minutes, 59)?;
    check_range("second", components.seconds, 59)?;
    check_range("millisecond", components.milliseconds, 999)
}

/// Check Ethiopian components: calendar date plus an Ethiopian-clock time.
///
/// # Errors
///
/// Returns [`QenError::UnrepresentableDate`] for any field out of range.
pub fn validate_ethiopian(components: &DateComponents) -> Result<(), QenError> {
    calendar::validate_ethiopian(
        i64::from(components.year),
        components.month,
        components.day,
    )?;
    validate_time(components, 11)
}

/// Check Gregorian components: a date that exists and a 24-hour time.
///
/// # Errors
///
/// Returns [`QenError::UnrepresentableDate`] for any field out of range.
pub fn validate_gregorian(components: &DateComponents) -> Result<(), QenError> {
    gregorian_instant(components).map(|_| ())
}

/// Build the civil instant named by Gregorian components.
pub(crate) fn gregorian_instant(components: &DateComponents) -> Result<NaiveDateTime, QenError> {
    validate_time(components, 23)?;
    let date = NaiveDate::from_ymd_opt(components.year, components.month, components.day)
        .ok_or_else(|| {
            QenError::UnrepresentableDate(format!(
                "Gregorian date {}-{}-{} does not exist",
                components.year, components.month, components.day
            ))
        })?;
    date.and_hms_milli_opt(
        components.hours,
        components.minutes,
        components.seconds,
        components.milliseconds,
    )
    .ok_or_else(|| QenError::UnrepresentableDate("time of day out of range".to_string()))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let c = parse_ethiopian("2014-07-08").unwrap();
        assert_eq!(c, DateComponents::new(2014, 7, 8));
    }

    #[test]
    fn test_parse_defaults_month_and_day() {
        assert_eq!(parse_ethiopian("2014").unwrap(), DateComponents::new(2014, 1, 1));
        assert_eq!(parse_ethiopian("2014-05").unwrap(), DateComponents::new(2014, 5, 1));
    }

    #[test]
    fn test_parse_alternative_separators() {
        for text in ["2014/07/08", "2014.07.08", "2014,07,08", "  2014-7-8  "] {
            assert_eq!(parse_ethiopian(text).unwrap(), DateComponents::new(2014, 7, 8), "{text}");
        }
    }

    #[test]
    fn test_parse_with_time() {
        let c = parse_ethiopian("2014-07-08   10:30:15.250").unwrap();
        assert_eq!(c, DateComponents::new(2014, 7, 8).with_time(10, 30, 15, 250));
        let c = parse_ethiopian("2014-07-08T4").unwrap();
        assert_eq!(c.hours, 4);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["invalid-date", "", "   ", "2014-07-08 noon", "2014--07", "2014-07-08-09"] {
            let err = parse_ethiopian(text).unwrap_err();
            assert!(matches!(err, QenError::InvalidInput(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for text in ["2016-13-06", "2014-14-01", "2014-01-31", "2014-01-01 12:00", "2014-01-01 1:60"] {
            let err = parse_ethiopian(text).unwrap_err();
            assert!(matches!(err, QenError::UnrepresentableDate(_)), "{text}: {err}");
        }
        assert!(parse_ethiopian("2015-13-06").is_ok());
    }

    #[test]
    fn test_parse_gregorian_plain() {
        let dt = parse_gregorian("2025-03-22 18:45:00.5").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2025, 3, 22)
                .unwrap()
                .and_hms_milli_opt(18, 45, 0, 500)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_gregorian_validates_month_length() {
        assert!(parse_gregorian("2023-02-29").is_err());
        assert!(parse_gregorian("2024-02-29").is_ok());
        assert!(parse_gregorian("2024-13-01").is_err());
        assert!(parse_gregorian("2024-01-01 24:00").is_err());
    }

    #[test]
    fn test_parse_gregorian_rfc3339_round_trips_through_local() {
        let dt = parse_gregorian("2024-06-01T12:00:00Z").unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_components_from_json() {
        let c = DateComponents::from_json(r#"{"year": 2016, "month": 13, "day": 5}"#).unwrap();
        assert_eq!(c, DateComponents::new(2016, 13, 5));
        let c = DateComponents::from_json(r#"{"year": 2016}"#).unwrap();
        assert_eq!(c, DateComponents::new(2016, 1, 1));
        let err = DateComponents::from_json(r#"{"month": 3}"#).unwrap_err();
        assert!(err.to_string().contains("year"), "got: {err}");
    }

    #[test]
    fn test_validate_ethiopian_hour_is_twelve_hour_clock() {
        assert!(validate_ethiopian(&DateComponents::new(2016, 1, 1).with_time(11, 59, 59, 999)).is_ok());
        assert!(validate_ethiopian(&DateComponents::new(2016, 1, 1).with_time(12, 0, 0, 0)).is_err());
    }

    #[test]
    fn test_validate_gregorian() {
        assert!(validate_gregorian(&DateComponents::new(2024, 2, 29).with_time(23, 0, 0, 0)).is_ok());
        assert!(validate_gregorian(&DateComponents::new(2023, 2, 29)).is_err());
        assert!(validate_gregorian(&DateComponents::new(2023, 0, 1)).is_err());
    }
}
