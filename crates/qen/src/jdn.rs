//! Julian Day Number bridge between the Ethiopian and Gregorian calendars.
//!
//! Every function here is exact integer arithmetic with floor semantics
//! (`div_euclid`/`rem_euclid`), so the conversions hold for negative years as
//! well as positive ones. The JDN is the single interchange point: to move a
//! date from one calendar to the other, convert it to a JDN and back out.
//!
//! # Functions
//!
//! - [`gregorian_to_jdn`] / [`jdn_to_gregorian`] — proleptic Gregorian calendar
//! - [`ethiopian_to_jdn`] / [`jdn_to_ethiopian`] — Ethiopian (Amete Mihret) calendar
//! - [`ethiopian_to_gregorian`] / [`gregorian_to_ethiopian`] — compositions of the above

use crate::calendar;
use crate::error::QenError;

/// JDN of the day before the Ethiopian epoch structure (Meskerem 1, year 1
/// falls at `ETHIOPIAN_EPOCH + 365`).
pub const ETHIOPIAN_EPOCH: i64 = 1_723_856;

/// Length of one Ethiopian four-year cycle (three common years and a leap year).
const DAYS_PER_CYCLE: i64 = 1461;

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// `month` is 1-based. The date is not validated; out-of-range days simply
/// count forward from the start of the month, which is what lets arithmetic
/// overflow (e.g. day 32 of January) normalize through a JDN round-trip.
///
/// # Examples
///
/// ```
/// use qen::jdn::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
/// ```
pub fn gregorian_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number to a proleptic Gregorian `(year, month, day)`.
///
/// Uses the Fliegel–Van Flandern inverse. The 400-year cycle is split off with
/// a floor division, so the remainder is always inside a cycle and the result
/// is correct for any JDN.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, u32, u32) {
    let mut r = jdn + 68569;
    let n = (4 * r).div_euclid(146_097);
    r -= (146_097 * n + 3).div_euclid(4);
    let mut year = (4000 * (r + 1)).div_euclid(1_461_001);
    r = r - (1461 * year).div_euclid(4) + 31;
    let mut month = (80 * r).div_euclid(2447);
    let day = r - (2447 * month).div_euclid(80);
    let carry = month.div_euclid(11);
    month = month + 2 - 12 * carry;
    year = 100 * (n - 49) + year + carry;

    (year, month as u32, day as u32)
}

/// Convert an Ethiopian date to its Julian Day Number.
///
/// The date is not validated here; see [`calendar::validate_ethiopian`].
///
/// # Examples
///
/// ```
/// use qen::jdn::ethiopian_to_jdn;
///
/// // Megabit 8, 2014 is March 17, 2022.
/// assert_eq!(ethiopian_to_jdn(2014, 7, 8), 2_459_656);
/// ```
pub fn ethiopian_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    ETHIOPIAN_EPOCH + 365 + 365 * (year - 1) + year.div_euclid(4) + 30 * i64::from(month)
        + i64::from(day)
        - 31
}

/// Convert a Julian Day Number to an Ethiopian `(year, month, day)`.
pub fn jdn_to_ethiopian(jdn: i64) -> (i64, u32, u32) {
    let offset = jdn - ETHIOPIAN_EPOCH;
    let r = offset.rem_euclid(DAYS_PER_CYCLE);
    let n = r % 365 + 365 * (r / 1460);

    let year = 4 * offset.div_euclid(DAYS_PER_CYCLE) + r / 365 - r / 1460;
    let month = n / 30 + 1;
    let day = n % 30 + 1;

    (year, month as u32, day as u32)
}

/// Convert a validated Ethiopian date to a Gregorian `(year, month, day)`.
///
/// # Errors
///
/// - [`QenError::OutOfRange`] if `|year|` exceeds [`calendar::MAX_YEAR`]
/// - [`QenError::UnrepresentableDate`] if the Ethiopian date does not exist
///   (month 14, day 31, Pagume 6 in a common year, ...)
///
/// # Examples
///
/// ```
/// use qen::jdn::ethiopian_to_gregorian;
///
/// assert_eq!(ethiopian_to_gregorian(2014, 7, 8).unwrap(), (2022, 3, 17));
/// assert!(ethiopian_to_gregorian(2016, 13, 6).is_err());
/// ```
pub fn ethiopian_to_gregorian(year: i64, month: u32, day: u32) -> Result<(i64, u32, u32), QenError> {
    if !(-calendar::MAX_YEAR..=calendar::MAX_YEAR).contains(&year) {
        return Err(QenError::OutOfRange(format!("Ethiopian year {year}")));
    }
    calendar::validate_ethiopian(year, month, day)?;
    let jdn = ethiopian_to_jdn(year, month, day);
    trace!("ethiopian {year}-{month}-{day} -> jdn {jdn}");
    Ok(jdn_to_gregorian(jdn))
}

/// Convert a Gregorian date to an Ethiopian `(year, month, day)`.
pub fn gregorian_to_ethiopian(year: i64, month: u32, day: u32) -> (i64, u32, u32) {
    let jdn = gregorian_to_jdn(year, month, day);
    trace!("gregorian {year}-{month}-{day} -> jdn {jdn}");
    jdn_to_ethiopian(jdn)
}

// ── Tests ───────────────────────────────────────────────────────────────────
