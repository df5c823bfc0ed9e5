//! Human-readable phrasing of calendar differences.
//!
//! [`relative_time`] picks the largest non-zero unit of the full breakdown
//! ("in 2 days", "3 years ago"). [`difference_string`] renders every non-zero
//! part ("2 years, 3 months, 5 days").

use serde::Serialize;

use crate::diff::{calendar_difference, Calendrical, FullDifference};
use crate::error::QenError;
use crate::locale::{self, Locale};
use crate::unit::Unit;

/// Options for relative-time phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelativeTimeOptions {
    /// Render only the quantity and unit, without "in"/"ago" wording.
    pub without_suffix: bool,
    /// Label set to render with.
    pub locale: Locale,
}

impl RelativeTimeOptions {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }
}

/// Options for [`difference_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStringOptions {
    /// Render only this unit's value instead of the full breakdown.
    pub unit: Option<Unit>,
    /// Render Latin-script labels instead of Ethiopic script.
    ///
    /// The Latin labels are the English locale ("2 days", "now"), not
    /// transliterated Amharic.
    pub use_latin: bool,
}

/// Describe `date` relative to `anchor`.
///
/// Future wording when `date` is after `anchor`, past wording when it is
/// before, and the same-instant phrase when they coincide.
///
/// # Errors
///
/// Returns [`QenError::InvalidDate`] if either date is invalid.
///
/// # Examples
///
/// ```
/// use qen::relative::{relative_time, RelativeTimeOptions};
/// use qen::{GregorianDate, Locale};
///
/// let anchor = GregorianDate::from_ymd(2024, 1, 1);
/// let date = GregorianDate::from_ymd(2024, 1, 3);
/// let options = RelativeTimeOptions::with_locale(Locale::English);
/// assert_eq!(relative_time(&date, &anchor, &options).unwrap(), "in 2 days");
/// assert_eq!(relative_time(&anchor, &date, &options).unwrap(), "2 days ago");
/// ```
pub fn relative_time<D: Calendrical>(
    date: &D,
    anchor: &D,
    options: &RelativeTimeOptions,
) -> Result<String, QenError> {
    let record = calendar_difference(anchor, date)?;
    let locale = options.locale;

    let Some((unit, count)) = largest_part(&record.full) else {
        return Ok(locale::same_instant(locale).to_string());
    };

    let quantity = locale::unit_label(locale, unit, count);
    Ok(if options.without_suffix {
        quantity
    } else if record.is_future {
        locale::future_phrase(locale, &quantity)
    } else {
        locale::past_phrase(locale, &quantity)
    })
}

/// Render the difference between two dates as a list of non-zero parts.
///
/// # Errors
///
/// Returns [`QenError::InvalidDate`] if either date is invalid.
pub fn difference_string<D: Calendrical>(
    date1: &D,
    date2: &D,
    options: &DiffStringOptions,
) -> Result<String, QenError> {
    let record = calendar_difference(date1, date2)?;
    let locale = Locale::latin_if(options.use_latin);

    if let Some(unit) = options.unit {
        return Ok(locale::unit_label(locale, unit, record.value(unit)));
    }

    let parts: Vec<String> = parts(&record.full)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(unit, count)| locale::unit_label(locale, unit, count))
        .collect();

    if parts.is_empty() {
        Ok(locale::same_time(locale).to_string())
    } else {
        Ok(parts.join(", "))
    }
}

fn parts(full: &FullDifference) -> [(Unit, i64); 7] {
    [
        (Unit::Year, full.years),
        (Unit::Month, full.months),
        (Unit::Day, full.days),
        (Unit::Hour, full.hours),
        (Unit::Minute, full.minutes),
        (Unit::Second, full.seconds),
        (Unit::Millisecond, full.milliseconds),
    ]
}

fn largest_part(full: &FullDifference) -> Option<(Unit, i64)> {
    parts(full).into_iter().find(|(_, count)| *count != 0)
}

// ── Tests ───────────────────────────────────────────────────────────────────
