//! Ethiopian calendar rules.
//!
//! Twelve months of 30 days followed by Pagume, a short thirteenth month of 5
//! days (6 in a leap year). A year is leap when `year mod 4 == 3`, i.e. the
//! year *before* the year divisible by four.

use crate::error::QenError;

/// Months in an Ethiopian year.
pub const MONTHS_PER_YEAR: u32 = 13;

/// Days in each of months 1–12.
pub const DAYS_PER_MONTH: u32 = 30;

/// The thirteenth month.
pub const PAGUME: u32 = 13;

/// Largest Ethiopian year magnitude that still lands inside chrono's
/// `NaiveDate` range (about ±262 000 Gregorian years).
pub const MAX_YEAR: i64 = 262_000;

/// Whether `year` is an Ethiopian leap year.
///
/// # Examples
///
/// ```
/// use qen::calendar::is_leap_year;
///
/// assert!(is_leap_year(2015));
/// assert!(!is_leap_year(2016));
/// assert!(is_leap_year(-1));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in `month` of `year`, or `None` if the month does not exist.
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    match month {
        1..=12 => Some(DAYS_PER_MONTH),
        PAGUME if is_leap_year(year) => Some(6),
        PAGUME => Some(5),
        _ => None,
    }
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i64) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// 1-based ordinal of the day within its year. Assumes a valid date.
pub fn day_of_year(month: u32, day: u32) -> u32 {
    (month - 1) * DAYS_PER_MONTH + day
}

/// Check that `(year, month, day)` names a day that exists.
///
/// # Errors
///
/// Returns [`QenError::UnrepresentableDate`] for a month outside 1–13, a day
/// outside 1–30, or a Pagume day beyond 5 (6 in a leap year).
pub fn validate_ethiopian(year: i64, month: u32, day: u32) -> Result<(), QenError> {
    let max_day = days_in_month(year, month).ok_or_else(|| {
        QenError::UnrepresentableDate(format!(
            "Ethiopian month {month} is outside 1-13 ({year}-{month}-{day})"
        ))
    })?;
    if day < 1 || day > max_day {
        return Err(QenError::UnrepresentableDate(format!(
            "Ethiopian day {day} is outside 1-{max_day} ({year}-{month}-{day})"
        )));
    }
    Ok(())
}

/// Clamp `day` to the length of `month` in `year`.
///
/// Used by month and year arithmetic so that landing on Pagume (or on a
/// common year's Pagume from a leap year's Pagume 6) never produces an
/// invalid date.
pub fn clamp_day(year: i64, month: u32, day: u32) -> u32 {
    days_in_month(year, month).map_or(day, |max| day.min(max))
}

/// Shift `(year, month)` by `months`, carrying whole multiples of 13 into the
/// year. Works for negative offsets; `None` if the year overflows.
///
/// # Examples
///
/// ```
/// use qen::calendar::shift_month;
///
/// assert_eq!(shift_month(2016, 13, 1), Some((2017, 1)));
/// assert_eq!(shift_month(2016, 1, -1), Some((2015, 13)));
/// assert_eq!(shift_month(2016, 7, 27), Some((2018, 8)));
/// assert_eq!(shift_month(2016, 7, i64::MAX), None);
/// ```
pub fn shift_month(year: i64, month: u32, months: i64) -> Option<(i64, u32)> {
    let index = (i64::from(month) - 1).checked_add(months)?;
    let per_year = i64::from(MONTHS_PER_YEAR);
    Some((
        year.checked_add(index.div_euclid(per_year))?,
        (index.rem_euclid(per_year) + 1) as u32,
    ))
}

/// Convert a Gregorian hour (0–23) to the Ethiopian clock.
///
/// Returns `(hour, is_night)` where `hour` is 0–11. Gregorian 06:00–17:59 is
/// the day half (`hour = g - 6`); 18:00–23:59 and 00:00–05:59 are the night
/// half (`hour = g - 18` and `hour = g + 6` respectively).
pub fn ethiopian_hour(gregorian_hour: u32) -> (u32, bool) {
    match gregorian_hour {
        6..=17 => (gregorian_hour - 6, false),
        18..=23 => (gregorian_hour - 18, true),
        _ => (gregorian_hour + 6, true),
    }
}

/// Convert an Ethiopian-clock hour (0–11) and night flag to a Gregorian hour.
pub fn gregorian_hour(hour: u32, is_night: bool) -> u32 {
    if is_night {
        (hour + 18) % 24
    } else {
        hour + 6
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
