//! Calendar-aware differences between two dates of the same calendar.
//!
//! Years and months are counted with the anniversary rule, in the dates' own
//! calendar (13 months per Ethiopian year, 12 per Gregorian year). The
//! remainder after whole months is the exact instant gap between the later
//! date and the earlier date advanced by those months, so no average month or
//! year length ever enters the computation.
//!
//! # Functions
//!
//! - [`difference`] — a single unit or the full [`CalendarDifference`] record
//! - [`calendar_difference`] — always the full record

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::error::QenError;
use crate::unit::{DiffUnit, Unit};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A date value the difference engine can measure.
///
/// Implemented by [`EthiopianDate`](crate::EthiopianDate) and
/// [`GregorianDate`](crate::GregorianDate). Accessors return `None` for the
/// invalid date.
pub trait Calendrical: Copy {
    /// Months in one year of this calendar.
    const MONTHS_PER_YEAR: i64;

    /// The canonical instant.
    fn instant(&self) -> Option<NaiveDateTime>;

    /// `(year, month, day)` in this calendar, month 1-based.
    fn year_month_day(&self) -> Option<(i64, u32, u32)>;

    /// This date advanced by `months` calendar months, the day clamped to the
    /// target month's length and the time of day preserved.
    fn plus_months(&self, months: i64) -> Self;
}

/// Years, months and days as true civil remainders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FullDifference {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

/// Total whole months, then the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthsDifference {
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

/// Total whole weeks, then the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeeksDifference {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

/// Three decompositions of the same non-negative gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalendarDifference {
    pub full: FullDifference,
    pub by_months: MonthsDifference,
    pub by_weeks: WeeksDifference,
    /// Whether the second date is after the first.
    pub is_future: bool,
}

impl CalendarDifference {
    /// The single-unit view of this record.
    ///
    /// Years, months, weeks and days are totals; hours, minutes, seconds and
    /// milliseconds are the components left inside the full breakdown.
    pub fn value(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year => self.full.years,
            Unit::Month => self.by_months.months,
            Unit::Week => self.by_weeks.weeks,
            Unit::Day => self.by_weeks.weeks * 7 + self.by_weeks.days,
            Unit::Hour => self.full.hours,
            Unit::Minute => self.full.minutes,
            Unit::Second => self.full.seconds,
            Unit::Millisecond => self.full.milliseconds,
        }
    }

    /// Whether both dates denote the same instant.
    pub fn is_zero(&self) -> bool {
        self.full == FullDifference::default()
    }
}

/// The result of [`difference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Difference {
    Value(i64),
    All(CalendarDifference),
}

impl Difference {
    /// The integer, if a single unit was requested.
    pub fn value(&self) -> Option<i64> {
        match self {
            Difference::Value(v) => Some(*v),
            Difference::All(_) => None,
        }
    }

    /// The full record, if `all` was requested.
    pub fn record(&self) -> Option<&CalendarDifference> {
        match self {
            Difference::Value(_) => None,
            Difference::All(record) => Some(record),
        }
    }
}

/// Compute the difference between two dates of the same calendar.
///
/// # Errors
///
/// Returns [`QenError::InvalidDate`] if either date is the invalid date, or
/// [`QenError::OutOfRange`] if advancing the earlier date leaves the
/// representable range.
///
/// # Examples
///
/// ```
/// use qen::diff::difference;
/// use qen::unit::{DiffUnit, Unit};
/// use qen::GregorianDate;
///
/// let a = GregorianDate::from_ymd(2020, 3, 1);
/// let b = GregorianDate::from_ymd(2025, 2, 28);
/// let years = difference(&a, &b, DiffUnit::Unit(Unit::Year)).unwrap();
/// assert_eq!(years.value(), Some(4));
/// ```
pub fn difference<D: Calendrical>(
    date1: &D,
    date2: &D,
    unit: DiffUnit,
) -> Result<Difference, QenError> {
    let record = calendar_difference(date1, date2)?;
    Ok(match unit {
        DiffUnit::All => Difference::All(record),
        DiffUnit::Unit(unit) => Difference::Value(record.value(unit)),
    })
}

/// Compute the full [`CalendarDifference`] between two dates.
///
/// The magnitude does not depend on argument order; `is_future` is true when
/// `date2` is after `date1`.
///
/// # Errors
///
/// See [`difference`].
pub fn calendar_difference<D: Calendrical>(
    date1: &D,
    date2: &D,
) -> Result<CalendarDifference, QenError> {
    let instant1 = date1.instant().ok_or(QenError::InvalidDate)?;
    let instant2 = date2.instant().ok_or(QenError::InvalidDate)?;

    let is_future = instant2 > instant1;
    let (earlier, later, earlier_at, later_at) = if is_future {
        (date1, date2, instant1, instant2)
    } else {
        (date2, date1, instant2, instant1)
    };

    let (y1, m1, d1) = earlier.year_month_day().ok_or(QenError::InvalidDate)?;
    let (y2, m2, d2) = later.year_month_day().ok_or(QenError::InvalidDate)?;
    let (t1, t2) = (earlier_at.time(), later_at.time());

    // Anniversary rule: a whole year has elapsed only once the later date's
    // (month, day, time) reaches the earlier date's.
    let mut years = y2 - y1;
    if (m2, d2, t2) < (m1, d1, t1) {
        years -= 1;
    }

    // Same rule one level down for months.
    let mut total_months = (y2 - y1) * D::MONTHS_PER_YEAR + i64::from(m2) - i64::from(m1);
    if (d2, t2) < (d1, t1) {
        total_months -= 1;
    }

    let anchor = earlier
        .plus_months(total_months)
        .instant()
        .ok_or_else(|| QenError::OutOfRange(format!("{total_months} months past {earlier_at}")))?;

    let after_months = split_millis(later_at - anchor);
    let overall = split_millis(later_at - earlier_at);

    Ok(CalendarDifference {
        full: FullDifference {
            years,
            months: total_months - years * D::MONTHS_PER_YEAR,
            days: after_months.days,
            hours: after_months.hours,
            minutes: after_months.minutes,
            seconds: after_months.seconds,
            milliseconds: after_months.milliseconds,
        },
        by_months: MonthsDifference {
            months: total_months,
            days: after_months.days,
            hours: after_months.hours,
            minutes: after_months.minutes,
            seconds: after_months.seconds,
            milliseconds: after_months.milliseconds,
        },
        by_weeks: WeeksDifference {
            weeks: overall.days / 7,
            days: overall.days % 7,
            hours: overall.hours,
            minutes: overall.minutes,
            seconds: overall.seconds,
            milliseconds: overall.milliseconds,
        },
        is_future,
    })
}

/// Exact day/hour/minute/second/millisecond split of a non-negative gap.
#[derive(Debug, Clone, Copy)]
struct Split {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
}

fn split_millis(delta: TimeDelta) -> Split {
    let total = delta.num_milliseconds().abs();
    Split {
        days: total / MS_PER_DAY,
        hours: total % MS_PER_DAY / MS_PER_HOUR,
        minutes: total % MS_PER_HOUR / MS_PER_MINUTE,
        seconds: total % MS_PER_MINUTE / MS_PER_SECOND,
        milliseconds: total % MS_PER_SECOND,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
