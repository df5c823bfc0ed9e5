//! Calendar-agnostic entry points.
//!
//! The value types carry every operation as a method; this module adds the
//! free-function surface on top: constructors, conversions, and the
//! [`AnyDate`] boundary where either calendar may appear at run time.
//!
//! # Functions
//!
//! - [`ethiopian`] / [`ethiopian_night`] / [`gregorian`] — build dates from any [`DateInput`]
//! - [`ethiopian_now`] / [`gregorian_now`] — the clock's current moment
//! - [`from_gregorian`] / [`to_gregorian`] — cross-calendar conversion
//! - [`format`] — template formatting for either calendar
//! - [`diff`] / [`diff_string`] — differences between two dates of one calendar

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::diff::{difference, Difference};
use crate::error::QenError;
use crate::ethiopian::EthiopianDate;
use crate::format as formatter;
use crate::gregorian::GregorianDate;
use crate::locale::Locale;
use crate::parse::DateInput;
use crate::relative::{self, DiffStringOptions};
use crate::unit::DiffUnit;

/// A date in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyDate {
    Ethiopian(EthiopianDate),
    Gregorian(GregorianDate),
}

impl AnyDate {
    pub fn is_valid(&self) -> bool {
        match self {
            AnyDate::Ethiopian(date) => date.is_valid(),
            AnyDate::Gregorian(date) => date.is_valid(),
        }
    }

    /// The canonical instant, whichever calendar the date is in.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            AnyDate::Ethiopian(date) => date.instant(),
            AnyDate::Gregorian(date) => date.instant(),
        }
    }

    fn calendar_name(&self) -> &'static str {
        match self {
            AnyDate::Ethiopian(_) => "Ethiopian",
            AnyDate::Gregorian(_) => "Gregorian",
        }
    }
}

impl From<EthiopianDate> for AnyDate {
    fn from(date: EthiopianDate) -> Self {
        AnyDate::Ethiopian(date)
    }
}

impl From<GregorianDate> for AnyDate {
    fn from(date: GregorianDate) -> Self {
        AnyDate::Gregorian(date)
    }
}

/// Whether `date` is an Ethiopian date.
pub fn is_ethiopian_date(date: &AnyDate) -> bool {
    matches!(date, AnyDate::Ethiopian(_))
}

/// Whether `date` is a Gregorian date.
pub fn is_gregorian_date(date: &AnyDate) -> bool {
    matches!(date, AnyDate::Gregorian(_))
}

// ── Construction ────────────────────────────────────────────────────────────

/// Build an Ethiopian date on the day half of the clock.
///
/// # Examples
///
/// ```
/// use qen::ethiopian;
///
/// assert_eq!(ethiopian("2014-07-08").to_string(), "08/07/2014");
/// assert_eq!(ethiopian((2014, 7, 8)).to_string(), "08/07/2014");
/// assert!(!ethiopian("2016-13-06").is_valid());
/// ```
pub fn ethiopian(input: impl Into<DateInput<EthiopianDate>>) -> EthiopianDate {
    EthiopianDate::new(input)
}

/// Build an Ethiopian date on the night half of the clock.
pub fn ethiopian_night(input: impl Into<DateInput<EthiopianDate>>) -> EthiopianDate {
    EthiopianDate::new_night(input)
}

/// Build a Gregorian date.
pub fn gregorian(input: impl Into<DateInput<GregorianDate>>) -> GregorianDate {
    GregorianDate::new(input)
}

pub fn ethiopian_now(clock: &impl Clock) -> EthiopianDate {
    EthiopianDate::now(clock)
}

pub fn gregorian_now(clock: &impl Clock) -> GregorianDate {
    GregorianDate::now(clock)
}

// ── Conversion ──────────────────────────────────────────────────────────────

/// The Ethiopian date of a Gregorian input.
///
/// # Examples
///
/// ```
/// use qen::from_gregorian;
///
/// let date = from_gregorian("2025-03-22");
/// assert_eq!((date.year(), date.month(), date.day()), (Some(2017), Some(7), Some(13)));
/// ```
pub fn from_gregorian(input: impl Into<DateInput<GregorianDate>>) -> EthiopianDate {
    GregorianDate::new(input).to_ethiopian()
}

/// The Gregorian civil instant of an Ethiopian date, `None` if it is invalid.
pub fn to_gregorian(date: &EthiopianDate) -> Option<NaiveDateTime> {
    date.instant()
}

// ── Formatting & differences ────────────────────────────────────────────────

/// Format a date of either calendar.
pub fn format(date: &AnyDate, template: &str, locale: Locale) -> String {
    match date {
        AnyDate::Ethiopian(date) => formatter::format_ethiopian(date, template, locale),
        AnyDate::Gregorian(date) => formatter::format_gregorian(date, template, locale),
    }
}

fn mismatch(date1: &AnyDate, date2: &AnyDate) -> QenError {
    QenError::CalendarMismatch(format!(
        "{} date paired with {} date; convert one first",
        date1.calendar_name(),
        date2.calendar_name()
    ))
}

/// Difference between two dates of the same calendar.
///
/// `unit` is a unit name (`"days"`, `"Month"`, ...) or `"all"`/empty for
/// the full record.
///
/// # Errors
///
/// - [`QenError::CalendarMismatch`] if the dates are in different calendars
/// - [`QenError::InvalidUnit`] for an unknown unit
/// - [`QenError::InvalidDate`] if either date is invalid
///
/// # Examples
///
/// ```
/// use qen::{diff, gregorian, AnyDate};
///
/// let a = AnyDate::from(gregorian("2020-03-01"));
/// let b = AnyDate::from(gregorian("2025-02-28"));
/// assert_eq!(diff(&a, &b, "years").unwrap().value(), Some(4));
/// ```
pub fn diff(date1: &AnyDate, date2: &AnyDate, unit: &str) -> Result<Difference, QenError> {
    let unit: DiffUnit = unit.parse()?;
    match (date1, date2) {
        (AnyDate::Ethiopian(a), AnyDate::Ethiopian(b)) => difference(a, b, unit),
        (AnyDate::Gregorian(a), AnyDate::Gregorian(b)) => difference(a, b, unit),
        _ => Err(mismatch(date1, date2)),
    }
}

/// Human-readable difference between two dates of the same calendar.
///
/// # Errors
///
/// As [`diff`], minus the unit parsing.
pub fn diff_string(
    date1: &AnyDate,
    date2: &AnyDate,
    options: &DiffStringOptions,
) -> Result<String, QenError> {
    match (date1, date2) {
        (AnyDate::Ethiopian(a), AnyDate::Ethiopian(b)) => {
            relative::difference_string(a, b, options)
        }
        (AnyDate::Gregorian(a), AnyDate::Gregorian(b)) => {
            relative::difference_string(a, b, options)
        }
        _ => Err(mismatch(date1, date2)),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn test_constructors() {
        assert_eq!(ethiopian((2014, 7, 8)), EthiopianDate::from_ymd(2014, 7, 8));
        assert_eq!(ethiopian_night("2014-07-08").is_night(), Some(true));
        assert_eq!(gregorian("2022-03-17"), GregorianDate::from_ymd(2022, 3, 17));
    }

    #[test]
    fn test_now_uses_clock() {
        let instant = NaiveDate::from_ymd_opt(2025, 3, 22)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(gregorian_now(&clock).instant(), Some(instant));
        let today = ethiopian_now(&clock);
        assert_eq!((today.year(), today.month(), today.day()), (Some(2017), Some(7), Some(13)));
        assert_eq!(today.hour(), Some(3));
    }

    #[test]
    fn test_to_gregorian() {
        let instant = to_gregorian(&ethiopian("2014-07-08")).unwrap();
        assert_eq!(
            instant,
            NaiveDate::from_ymd_opt(2022, 3, 17)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap()
        );
        assert_eq!(to_gregorian(&EthiopianDate::invalid()), None);
    }

    #[test]
    fn test_calendar_predicates() {
        let e = AnyDate::from(ethiopian("2014-07-08"));
        let g = AnyDate::from(gregorian("2022-03-17"));
        assert!(is_ethiopian_date(&e) && !is_gregorian_date(&e));
        assert!(is_gregorian_date(&g) && !is_ethiopian_date(&g));
    }

    #[test]
    fn test_format_dispatches_on_calendar() {
        let e = AnyDate::from(ethiopian("2014-07-08"));
        let g = AnyDate::from(gregorian("2022-03-17"));
        assert_eq!(format(&e, "MMMM d", Locale::English), "Megabit 8");
        assert_eq!(format(&g, "MMMM d", Locale::English), "March 17");
    }

    #[test]
    fn test_mixed_calendars_are_rejected() {
        let e = AnyDate::from(ethiopian("2014-07-08"));
        let g = AnyDate::from(gregorian("2022-03-17"));
        assert!(matches!(diff(&e, &g, "days"), Err(QenError::CalendarMismatch(_))));
        assert!(matches!(
            diff_string(&g, &e, &DiffStringOptions::default()),
            Err(QenError::CalendarMismatch(_))
        ));
    }

    #[test]
    fn test_diff_unit_parsing() {
        let a = AnyDate::from(ethiopian("2014-07-08"));
        let b = AnyDate::from(ethiopian("2014-08-10"));
        assert_eq!(diff(&a, &b, "days").unwrap().value(), Some(32));
        assert!(diff(&a, &b, "").unwrap().record().is_some());
        assert!(matches!(diff(&a, &b, "decade"), Err(QenError::InvalidUnit(_))));
    }
}
