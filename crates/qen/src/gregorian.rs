//! The Gregorian date value.
//!
//! A [`GregorianDate`] is a civil instant at millisecond precision with
//! 1-based months. Month arithmetic delegates to chrono's `Months`, which
//! clamps the day to the target month's length.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Timelike};

use crate::clock::Clock;
use crate::diff::{self, Calendrical, Difference};
use crate::error::QenError;
use crate::ethiopian::EthiopianDate;
use crate::format;
use crate::locale::{self, Locale};
use crate::parse::{self, DateInput};
use crate::relative::{self, DiffStringOptions, RelativeTimeOptions};
use crate::unit::{DiffUnit, Unit};

/// A date in the proleptic Gregorian calendar, or the invalid date.
///
/// # Examples
///
/// ```
/// use qen::GregorianDate;
///
/// let date = GregorianDate::new("2024-01-31");
/// assert_eq!(date.add_months(1).to_string(), "29/02/2024");
/// assert_eq!(date.to_ethiopian().to_string(), "22/05/2016");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    instant: Option<NaiveDateTime>,
}

impl GregorianDate {
    // ── Construction ────────────────────────────────────────────────────

    /// Build a date; malformed or out-of-range input yields the invalid date.
    pub fn new(input: impl Into<DateInput<Self>>) -> Self {
        Self::try_new(input).unwrap_or_else(|e| {
            debug!("rejected Gregorian date input: {e}");
            Self::invalid()
        })
    }

    /// Strict constructor.
    ///
    /// # Errors
    ///
    /// - [`QenError::InvalidInput`] for a malformed date string
    /// - [`QenError::UnrepresentableDate`] for a month, day or time out of range
    /// - [`QenError::InvalidDate`] when copying the invalid date
    pub fn try_new(input: impl Into<DateInput<Self>>) -> Result<Self, QenError> {
        let instant = match input.into() {
            DateInput::Instant(instant) => instant,
            DateInput::Components(components) => parse::gregorian_instant(&components)?,
            DateInput::Text(text) => parse::parse_gregorian(&text)?,
            DateInput::Existing(date) => date.instant.ok_or(QenError::InvalidDate)?,
        };
        Ok(Self::from_instant(instant))
    }

    /// Midnight of the given day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new((year, month, day))
    }

    pub fn invalid() -> Self {
        Self { instant: None }
    }

    /// The current moment as read from `clock`.
    pub fn now(clock: &impl Clock) -> Self {
        Self::from_instant(clock.now())
    }

    pub fn from_instant(instant: NaiveDateTime) -> Self {
        Self {
            instant: Some(instant.trunc_subsecs(3)),
        }
    }

    /// The same instant seen in the Ethiopian calendar.
    pub fn to_ethiopian(&self) -> EthiopianDate {
        EthiopianDate::from_gregorian(self)
    }

    fn then(&self, step: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>, what: fmt::Arguments<'_>) -> Self {
        let Some(instant) = self.instant else {
            return Self::invalid();
        };
        match step(instant) {
            Some(next) => Self::from_instant(next),
            None => {
                debug!("Gregorian date arithmetic left the representable range: {instant} {what}");
                Self::invalid()
            }
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    pub fn year(&self) -> Option<i32> {
        self.instant.map(|i| i.year())
    }

    /// Month, 1 = January … 12 = December.
    pub fn month(&self) -> Option<u32> {
        self.instant.map(|i| i.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.instant.map(|i| i.day())
    }

    /// Hour, 0–23.
    pub fn hour(&self) -> Option<u32> {
        self.instant.map(|i| i.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.instant.map(|i| i.minute())
    }

    pub fn second(&self) -> Option<u32> {
        self.instant.map(|i| i.second())
    }

    pub fn millisecond(&self) -> Option<u32> {
        self.instant.map(|i| i.nanosecond() / 1_000_000)
    }

    /// Day of the week, 0 = Sunday … 6 = Saturday.
    pub fn day_of_week(&self) -> Option<u32> {
        self.instant
            .map(|i| i.weekday().num_days_from_sunday())
    }

    pub fn day_of_year(&self) -> Option<u32> {
        self.instant.map(|i| i.ordinal())
    }

    pub fn week_of_month(&self) -> Option<u32> {
        self.day().map(|d| d.div_ceil(7))
    }

    pub fn week_of_year(&self) -> Option<u32> {
        self.day_of_year().map(|d| d.div_ceil(7))
    }

    pub fn is_leap_year(&self) -> Option<bool> {
        self.instant
            .map(|i| NaiveDate::from_ymd_opt(i.year(), 2, 29).is_some())
    }

    pub fn days_in_month(&self) -> Option<u32> {
        self.instant
            .and_then(|i| {
                let first = i.date().with_day(1)?;
                let next = first.checked_add_months(Months::new(1))?;
                u32::try_from(next.signed_duration_since(first).num_days()).ok()
            })
    }

    /// Morning / afternoon / evening / night label for this instant.
    pub fn time_of_day(&self, locale: Locale) -> Option<&'static str> {
        self.instant
            .map(|i| locale::time_of_day(locale, i.hour()))
    }

    // ── Arithmetic ──────────────────────────────────────────────────────

    /// Shift the year; February 29 clamps to February 28 in a common year.
    pub fn add_years(&self, years: i64) -> Self {
        match years.checked_mul(12) {
            Some(months) => self.add_months(months),
            None => Self::invalid(),
        }
    }

    /// Shift by calendar months, clamping the day to the target month's length.
    pub fn add_months(&self, months: i64) -> Self {
        let magnitude = u32::try_from(months.unsigned_abs()).ok().map(Months::new);
        self.then(
            |instant| {
                let magnitude = magnitude?;
                if months >= 0 {
                    instant.checked_add_months(magnitude)
                } else {
                    instant.checked_sub_months(magnitude)
                }
            },
            format_args!("+ {months} months"),
        )
    }

    pub fn add_weeks(&self, weeks: i64) -> Self {
        self.shift(TimeDelta::try_weeks(weeks), weeks, Unit::Week)
    }

    pub fn add_days(&self, days: i64) -> Self {
        self.shift(TimeDelta::try_days(days), days, Unit::Day)
    }

    pub fn add_hours(&self, hours: i64) -> Self {
        self.shift(TimeDelta::try_hours(hours), hours, Unit::Hour)
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.shift(TimeDelta::try_minutes(minutes), minutes, Unit::Minute)
    }

    pub fn add_seconds(&self, seconds: i64) -> Self {
        self.shift(TimeDelta::try_seconds(seconds), seconds, Unit::Second)
    }

    pub fn add_milliseconds(&self, milliseconds: i64) -> Self {
        self.shift(
            TimeDelta::try_milliseconds(milliseconds),
            milliseconds,
            Unit::Millisecond,
        )
    }

    fn shift(&self, delta: Option<TimeDelta>, amount: i64, unit: Unit) -> Self {
        self.then(
            |instant| instant.checked_add_signed(delta?),
            format_args!("+ {amount} {unit}"),
        )
    }

    /// Add `amount` of `unit`.
    pub fn add_unit(&self, amount: i64, unit: Unit) -> Self {
        match unit {
            Unit::Year => self.add_years(amount),
            Unit::Month => self.add_months(amount),
            Unit::Week => self.add_weeks(amount),
            Unit::Day => self.add_days(amount),
            Unit::Hour => self.add_hours(amount),
            Unit::Minute => self.add_minutes(amount),
            Unit::Second => self.add_seconds(amount),
            Unit::Millisecond => self.add_milliseconds(amount),
        }
    }

    /// Subtract `amount` of `unit`.
    pub fn subtract_unit(&self, amount: i64, unit: Unit) -> Self {
        match amount.checked_neg() {
            Some(negated) => self.add_unit(negated, unit),
            None => Self::invalid(),
        }
    }

    /// Add `amount` of a unit named by string.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidUnit`] for an unrecognized unit.
    pub fn add(&self, amount: i64, unit: &str) -> Result<Self, QenError> {
        Ok(self.add_unit(amount, unit.parse()?))
    }

    /// Subtract `amount` of a unit named by string.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidUnit`] for an unrecognized unit.
    pub fn subtract(&self, amount: i64, unit: &str) -> Result<Self, QenError> {
        Ok(self.subtract_unit(amount, unit.parse()?))
    }

    pub fn start_of_day(&self) -> Self {
        self.then(
            |instant| Some(instant.date().and_time(NaiveTime::MIN)),
            format_args!("start of day"),
        )
    }

    pub fn end_of_day(&self) -> Self {
        self.then(
            |instant| instant.date().and_hms_milli_opt(23, 59, 59, 999),
            format_args!("end of day"),
        )
    }

    // ── Comparison ──────────────────────────────────────────────────────

    pub fn is_before(&self, other: &Self) -> bool {
        matches!((self.instant, other.instant), (Some(a), Some(b)) if a < b)
    }

    pub fn is_after(&self, other: &Self) -> bool {
        matches!((self.instant, other.instant), (Some(a), Some(b)) if a > b)
    }

    pub fn is_same(&self, other: &Self) -> bool {
        matches!((self.instant, other.instant), (Some(a), Some(b)) if a == b)
    }

    // ── Formatting & differences ────────────────────────────────────────

    pub fn format(&self, template: &str, locale: Locale) -> String {
        format::format_gregorian(self, template, locale)
    }

    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn difference(&self, other: &Self, unit: DiffUnit) -> Result<Difference, QenError> {
        diff::difference(self, other, unit)
    }

    /// # Errors
    ///
    /// [`QenError::InvalidUnit`] for an unknown unit, otherwise as
    /// [`difference`](Self::difference).
    pub fn diff(&self, other: &Self, unit: &str) -> Result<Difference, QenError> {
        self.difference(other, unit.parse()?)
    }

    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn diff_string(&self, other: &Self, options: &DiffStringOptions) -> Result<String, QenError> {
        relative::difference_string(self, other, options)
    }

    /// This date described relative to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn from(&self, other: &Self, options: &RelativeTimeOptions) -> Result<String, QenError> {
        relative::relative_time(self, other, options)
    }

    /// `other` described relative to this date.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn to(&self, other: &Self, options: &RelativeTimeOptions) -> Result<String, QenError> {
        relative::relative_time(other, self, options)
    }

    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if this date is invalid.
    pub fn from_now(&self, clock: &impl Clock, options: &RelativeTimeOptions) -> Result<String, QenError> {
        self.from(&Self::now(clock), options)
    }

    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if this date is invalid.
    pub fn to_now(&self, clock: &impl Clock, options: &RelativeTimeOptions) -> Result<String, QenError> {
        self.to(&Self::now(clock), options)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("dd/MM/YYYY", Locale::default()))
    }
}

impl Calendrical for GregorianDate {
    const MONTHS_PER_YEAR: i64 = 12;

    fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    fn year_month_day(&self) -> Option<(i64, u32, u32)> {
        self.instant
            .map(|i| (i64::from(i.year()), i.month(), i.day()))
    }

    fn plus_months(&self, months: i64) -> Self {
        self.add_months(months)
    }
}

impl From<GregorianDate> for DateInput<GregorianDate> {
    fn from(date: GregorianDate) -> Self {
        DateInput::Existing(date)
    }
}

impl From<EthiopianDate> for DateInput<GregorianDate> {
    fn from(date: EthiopianDate) -> Self {
        DateInput::Existing(date.to_gregorian())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
