//! The Ethiopian date value.
//!
//! An [`EthiopianDate`] stores its canonical instant (Gregorian civil time,
//! millisecond precision) together with the Ethiopian `(year, month, day)` of
//! that instant's civil date. The Ethiopian hour and night flag are derived
//! from the instant on demand, so the two views can never disagree.
//!
//! The Ethiopian clock starts at Gregorian 06:00: day hours 0–11 cover
//! 06:00–17:59 and night hours 0–11 cover 18:00–05:59. The date itself turns
//! over at Gregorian midnight.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Timelike};

use crate::calendar;
use crate::clock::Clock;
use crate::diff::{self, Calendrical, Difference};
use crate::error::QenError;
use crate::format;
use crate::gregorian::GregorianDate;
use crate::jdn;
use crate::locale::{self, Locale};
use crate::parse::{self, DateComponents, DateInput};
use crate::relative::{self, DiffStringOptions, RelativeTimeOptions};
use crate::unit::{DiffUnit, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Fields {
    instant: NaiveDateTime,
    year: i32,
    month: u32,
    day: u32,
}

/// A date in the Ethiopian calendar, or the invalid date.
///
/// Values are immutable; every arithmetic method returns a new value. Any
/// operation on the invalid date yields the invalid date (or `None`/`false`
/// from accessors and comparisons).
///
/// # Examples
///
/// ```
/// use qen::EthiopianDate;
///
/// let date = EthiopianDate::new("2016-13-05");
/// assert_eq!(date.add_months(1).to_string(), "05/01/2017");
/// assert!(!EthiopianDate::new("2016-13-06").is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthiopianDate {
    fields: Option<Fields>,
}

impl EthiopianDate {
    // ── Construction ────────────────────────────────────────────────────

    /// Build a date on the day half of the Ethiopian clock.
    ///
    /// Malformed or out-of-range input yields the invalid date.
    pub fn new(input: impl Into<DateInput<Self>>) -> Self {
        Self::lenient(input.into(), false)
    }

    /// Build a date on the night half of the Ethiopian clock.
    ///
    /// The night flag only affects component and text input; an instant
    /// already fixes which half it falls in.
    pub fn new_night(input: impl Into<DateInput<Self>>) -> Self {
        Self::lenient(input.into(), true)
    }

    /// Strict constructor.
    ///
    /// # Errors
    ///
    /// - [`QenError::InvalidInput`] for a malformed date string
    /// - [`QenError::UnrepresentableDate`] for a month, day or time out of range
    /// - [`QenError::InvalidDate`] when copying the invalid date
    /// - [`QenError::OutOfRange`] outside chrono's representable range
    pub fn try_new(input: impl Into<DateInput<Self>>, is_night: bool) -> Result<Self, QenError> {
        match input.into() {
            DateInput::Instant(instant) => Self::try_from_instant(instant),
            DateInput::Components(components) => Self::from_components(&components, is_night),
            DateInput::Text(text) => {
                Self::from_components(&parse::parse_ethiopian(&text)?, is_night)
            }
            DateInput::Existing(date) if date.is_valid() => Ok(date),
            DateInput::Existing(_) => Err(QenError::InvalidDate),
        }
    }

    fn lenient(input: DateInput<Self>, is_night: bool) -> Self {
        Self::try_new(input, is_night).unwrap_or_else(|e| {
            debug!("rejected Ethiopian date input: {e}");
            Self::invalid()
        })
    }

    /// The given day at Ethiopian 0:00 (Gregorian 06:00).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new((year, month, day))
    }

    /// The invalid date.
    pub fn invalid() -> Self {
        Self { fields: None }
    }

    /// The current moment as read from `clock`.
    pub fn now(clock: &impl Clock) -> Self {
        Self::from_instant(clock.now())
    }

    /// The Ethiopian date of a Gregorian civil instant.
    pub fn from_instant(instant: NaiveDateTime) -> Self {
        Self::lenient(DateInput::Instant(instant), false)
    }

    /// The same instant seen in the Ethiopian calendar.
    pub fn from_gregorian(date: &GregorianDate) -> Self {
        date.instant()
            .map_or_else(Self::invalid, Self::from_instant)
    }

    /// The same instant seen in the Gregorian calendar.
    pub fn to_gregorian(&self) -> GregorianDate {
        self.instant()
            .map_or_else(GregorianDate::invalid, GregorianDate::from_instant)
    }

    fn try_from_instant(instant: NaiveDateTime) -> Result<Self, QenError> {
        let instant = instant.trunc_subsecs(3);
        let (year, month, day) =
            jdn::gregorian_to_ethiopian(i64::from(instant.year()), instant.month(), instant.day());
        let year = i32::try_from(year)
            .map_err(|_| QenError::OutOfRange(format!("Ethiopian year {year}")))?;
        Ok(Self {
            fields: Some(Fields {
                instant,
                year,
                month,
                day,
            }),
        })
    }

    fn from_components(components: &DateComponents, is_night: bool) -> Result<Self, QenError> {
        parse::validate_ethiopian(components)?;
        let time = NaiveTime::from_hms_milli_opt(
            calendar::gregorian_hour(components.hours, is_night),
            components.minutes,
            components.seconds,
            components.milliseconds,
        )
        .ok_or_else(|| QenError::UnrepresentableDate("time of day out of range".to_string()))?;
        Self::at(
            i64::from(components.year),
            components.month,
            components.day,
            time,
        )
    }

    /// The Ethiopian day `(year, month, day)` at Gregorian wall time `time`.
    fn at(year: i64, month: u32, day: u32, time: NaiveTime) -> Result<Self, QenError> {
        let (g_year, g_month, g_day) = jdn::ethiopian_to_gregorian(year, month, day)?;
        let out_of_range = || QenError::OutOfRange(format!("Ethiopian year {year}"));
        let civil = i32::try_from(g_year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, g_month, g_day))
            .ok_or_else(out_of_range)?;
        let year = i32::try_from(year).map_err(|_| out_of_range())?;
        Ok(Self {
            fields: Some(Fields {
                instant: civil.and_time(time),
                year,
                month,
                day,
            }),
        })
    }

    /// Apply a fallible step to a valid date; errors collapse to the invalid date.
    fn then(&self, step: impl FnOnce(&Fields) -> Result<Self, QenError>) -> Self {
        match &self.fields {
            Some(fields) => step(fields).unwrap_or_else(|e| {
                debug!("Ethiopian date arithmetic failed: {e}");
                Self::invalid()
            }),
            None => Self::invalid(),
        }
    }

    pub(crate) fn parts(&self) -> Option<(i32, u32, u32, NaiveDateTime)> {
        self.fields
            .map(|f| (f.year, f.month, f.day, f.instant))
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn is_valid(&self) -> bool {
        self.fields.is_some()
    }

    /// The canonical instant (Gregorian civil time).
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.fields.map(|f| f.instant)
    }

    pub fn year(&self) -> Option<i32> {
        self.fields.map(|f| f.year)
    }

    /// Month, 1–13.
    pub fn month(&self) -> Option<u32> {
        self.fields.map(|f| f.month)
    }

    pub fn day(&self) -> Option<u32> {
        self.fields.map(|f| f.day)
    }

    /// Hour on the Ethiopian clock, 0–11.
    pub fn hour(&self) -> Option<u32> {
        self.instant()
            .map(|i| calendar::ethiopian_hour(i.hour()).0)
    }

    /// Whether the hour is on the night half of the Ethiopian clock.
    pub fn is_night(&self) -> Option<bool> {
        self.instant()
            .map(|i| calendar::ethiopian_hour(i.hour()).1)
    }

    pub fn minute(&self) -> Option<u32> {
        self.instant().map(|i| i.minute())
    }

    pub fn second(&self) -> Option<u32> {
        self.instant().map(|i| i.second())
    }

    pub fn millisecond(&self) -> Option<u32> {
        self.instant().map(|i| i.nanosecond() / 1_000_000)
    }

    /// Day of the week, 0 = Sunday … 6 = Saturday.
    pub fn day_of_week(&self) -> Option<u32> {
        self.instant()
            .map(|i| i.weekday().num_days_from_sunday())
    }

    /// 1-based ordinal of the day within the Ethiopian year.
    pub fn day_of_year(&self) -> Option<u32> {
        self.fields
            .map(|f| calendar::day_of_year(f.month, f.day))
    }

    pub fn week_of_month(&self) -> Option<u32> {
        self.day().map(|d| d.div_ceil(7))
    }

    pub fn week_of_year(&self) -> Option<u32> {
        self.day_of_year().map(|d| d.div_ceil(7))
    }

    pub fn is_leap_year(&self) -> Option<bool> {
        self.year()
            .map(|y| calendar::is_leap_year(i64::from(y)))
    }

    pub fn days_in_month(&self) -> Option<u32> {
        self.fields
            .and_then(|f| calendar::days_in_month(i64::from(f.year), f.month))
    }

    /// Morning / afternoon / evening / night label for this instant.
    pub fn time_of_day(&self, locale: Locale) -> Option<&'static str> {
        self.instant()
            .map(|i| locale::time_of_day(locale, i.hour()))
    }

    // ── Arithmetic ──────────────────────────────────────────────────────

    /// Shift the year, clamping Pagume 6 to Pagume 5 in a common year.
    pub fn add_years(&self, years: i64) -> Self {
        self.then(|f| {
            let year = i64::from(f.year)
                .checked_add(years)
                .ok_or_else(|| QenError::OutOfRange(format!("{} + {years} years", f.year)))?;
            let day = calendar::clamp_day(year, f.month, f.day);
            Self::at(year, f.month, day, f.instant.time())
        })
    }

    /// Shift by calendar months, 13 to the year; the day is clamped to the
    /// target month's length.
    pub fn add_months(&self, months: i64) -> Self {
        self.then(|f| {
            let (year, month) = calendar::shift_month(i64::from(f.year), f.month, months)
                .ok_or_else(|| QenError::OutOfRange(format!("{} + {months} months", f.year)))?;
            let day = calendar::clamp_day(year, month, f.day);
            Self::at(year, month, day, f.instant.time())
        })
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
        self.then(|f| {
            delta
                .and_then(|delta| f.instant.checked_add_signed(delta))
                .ok_or_else(|| QenError::OutOfRange(format!("{} + {amount} {unit}", f.instant)))
                .and_then(Self::try_from_instant)
        })
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

    /// Add `amount` of a unit named by string (`"day"`, `"Months"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidUnit`] for an unrecognized unit; nothing is
    /// added.
    ///
    /// # Examples
    ///
    /// ```
    /// use qen::EthiopianDate;
    ///
    /// let date = EthiopianDate::from_ymd(2016, 13, 5);
    /// assert_eq!(date.add(1, "month").unwrap(), EthiopianDate::from_ymd(2017, 1, 5));
    /// assert!(date.add(1, "fortnight").is_err());
    /// ```
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

    /// Gregorian 00:00:00.000 of this civil date (Ethiopian night hour 6).
    pub fn start_of_day(&self) -> Self {
        self.then(|f| Self::try_from_instant(f.instant.date().and_time(NaiveTime::MIN)))
    }

    /// Gregorian 23:59:59.999 of this civil date (Ethiopian night hour 5).
    pub fn end_of_day(&self) -> Self {
        self.then(|f| {
            let last = f
                .instant
                .date()
                .and_hms_milli_opt(23, 59, 59, 999)
                .ok_or_else(|| QenError::OutOfRange(format!("end of {}", f.instant.date())))?;
            Self::try_from_instant(last)
        })
    }

    // ── Comparison ──────────────────────────────────────────────────────

    /// Strictly earlier. `false` if either date is invalid.
    pub fn is_before(&self, other: &Self) -> bool {
        matches!((self.instant(), other.instant()), (Some(a), Some(b)) if a < b)
    }

    /// Strictly later. `false` if either date is invalid.
    pub fn is_after(&self, other: &Self) -> bool {
        matches!((self.instant(), other.instant()), (Some(a), Some(b)) if a > b)
    }

    /// Same instant. `false` if either date is invalid.
    pub fn is_same(&self, other: &Self) -> bool {
        matches!((self.instant(), other.instant()), (Some(a), Some(b)) if a == b)
    }

    // ── Formatting & differences ────────────────────────────────────────

    /// Render with a token template; see [`crate::format`].
    pub fn format(&self, template: &str, locale: Locale) -> String {
        format::format_ethiopian(self, template, locale)
    }

    /// Difference from `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn difference(&self, other: &Self, unit: DiffUnit) -> Result<Difference, QenError> {
        diff::difference(self, other, unit)
    }

    /// [`difference`](Self::difference) with the unit named by string
    /// (`"all"` or empty for the full record).
    ///
    /// # Errors
    ///
    /// [`QenError::InvalidUnit`] for an unknown unit, otherwise as
    /// [`difference`](Self::difference).
    pub fn diff(&self, other: &Self, unit: &str) -> Result<Difference, QenError> {
        self.difference(other, unit.parse()?)
    }

    /// Human-readable difference, e.g. `"1 year, 2 months, 3 days"`.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if either date is invalid.
    pub fn diff_string(&self, other: &Self, options: &DiffStringOptions) -> Result<String, QenError> {
        relative::difference_string(self, other, options)
    }

    /// This date described relative to `other` ("in 2 days" when later).
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

    /// This date described relative to the clock's current moment.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if this date is invalid.
    pub fn from_now(&self, clock: &impl Clock, options: &RelativeTimeOptions) -> Result<String, QenError> {
        self.from(&Self::now(clock), options)
    }

    /// The clock's current moment described relative to this date.
    ///
    /// # Errors
    ///
    /// Returns [`QenError::InvalidDate`] if this date is invalid.
    pub fn to_now(&self, clock: &impl Clock, options: &RelativeTimeOptions) -> Result<String, QenError> {
        self.to(&Self::now(clock), options)
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("dd/MM/YYYY", Locale::default()))
    }
}

impl Calendrical for EthiopianDate {
    const MONTHS_PER_YEAR: i64 = calendar::MONTHS_PER_YEAR as i64;

    fn instant(&self) -> Option<NaiveDateTime> {
        EthiopianDate::instant(self)
    }

    fn year_month_day(&self) -> Option<(i64, u32, u32)> {
        self.fields
            .map(|f| (i64::from(f.year), f.month, f.day))
    }

    fn plus_months(&self, months: i64) -> Self {
        self.add_months(months)
    }
}

impl From<EthiopianDate> for DateInput<EthiopianDate> {
    fn from(date: EthiopianDate) -> Self {
        DateInput::Existing(date)
    }
}

impl From<GregorianDate> for DateInput<EthiopianDate> {
    fn from(date: GregorianDate) -> Self {
        match date.instant() {
            Some(instant) => DateInput::Instant(instant),
            None => DateInput::Existing(EthiopianDate::invalid()),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
