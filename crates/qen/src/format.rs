//! Template formatting for both calendars.
//!
//! A template is scanned for ASCII words (`[A-Za-z0-9_]+`). A word is replaced
//! only when the whole word is one of the tokens below; every other word and
//! every non-word character passes through unchanged, so `"MMM dd, YYYY"`
//! becomes `"Meg 08, 2014"` while `"Today"` stays `"Today"`.
//!
//! | Token | Output |
//! |---|---|
//! | `YYYY` / `YY` | year, 4 digits / last 2 digits |
//! | `MMMM` / `MMM` | month name / first three characters |
//! | `MM` / `M` | month number, padded / unpadded |
//! | `DDDD` / `DDD` | weekday name / first three characters |
//! | `dd` / `d` | day of month, padded / unpadded |
//! | `HH` / `H` | hour, padded / unpadded |
//! | `hh` / `h` | 12-hour clock, padded / unpadded |
//! | `mm` / `ss` / `SSS` | minute / second / millisecond |
//! | `A` / `a` | period label / lowercase period label |
//!
//! On Ethiopian dates `HH` is the Ethiopian hour (0–11) and `A` is the
//! time-of-day label. On Gregorian dates `HH` is the 24-hour clock and `A` is
//! the meridiem.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::{Captures, Regex};

use crate::calendar;
use crate::locale::{self, Locale};
use crate::{EthiopianDate, GregorianDate};

/// What an invalid date formats as.
pub const INVALID_DATE: &str = "Invalid Date";

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Fields shared by both calendars' token tables.
struct View {
    year: i32,
    month: u32,
    day: u32,
    month_name: &'static str,
    weekday_name: &'static str,
    instant: NaiveDateTime,
}

impl View {
    fn token(&self, word: &str) -> Option<String> {
        Some(match word {
            "YYYY" => format!("{:04}", self.year),
            "YY" => format!("{:02}", self.year.rem_euclid(100)),
            "MMMM" => self.month_name.to_string(),
            "MMM" => abbreviate(self.month_name),
            "MM" => format!("{:02}", self.month),
            "M" => self.month.to_string(),
            "DDDD" => self.weekday_name.to_string(),
            "DDD" => abbreviate(self.weekday_name),
            "dd" => format!("{:02}", self.day),
            "d" => self.day.to_string(),
            "mm" => format!("{:02}", self.instant.minute()),
            "ss" => format!("{:02}", self.instant.second()),
            "SSS" => format!("{:03}", self.instant.nanosecond() / 1_000_000),
            _ => return None,
        })
    }
}

fn abbreviate(name: &str) -> String {
    name.chars().take(3).collect()
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn render(template: &str, substitute: impl Fn(&str) -> Option<String>) -> String {
    WORD_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let word = &caps[0];
            substitute(word).unwrap_or_else(|| word.to_string())
        })
        .into_owned()
}

/// Format an Ethiopian date. Invalid dates render as [`INVALID_DATE`].
///
/// # Examples
///
/// ```
/// use qen::format::format_ethiopian;
/// use qen::{EthiopianDate, Locale};
///
/// let date = EthiopianDate::from_ymd(2014, 7, 8);
/// assert_eq!(format_ethiopian(&date, "YYYY-MM-dd", Locale::English), "2014-07-08");
/// assert_eq!(format_ethiopian(&date, "MMMM d", Locale::English), "Megabit 8");
/// ```
pub fn format_ethiopian(date: &EthiopianDate, template: &str, locale: Locale) -> String {
    let Some((year, month, day, instant)) = date.parts() else {
        return INVALID_DATE.to_string();
    };
    let view = View {
        year,
        month,
        day,
        month_name: locale::ethiopian_month_name(locale, month).unwrap_or_default(),
        weekday_name: weekday(locale, &instant),
        instant,
    };
    let gregorian_hour = instant.hour();
    let (hour, _) = calendar::ethiopian_hour(gregorian_hour);

    render(template, |word| match word {
        "HH" => Some(format!("{hour:02}")),
        "H" => Some(hour.to_string()),
        "hh" => Some(format!("{:02}", twelve_hour(hour))),
        "h" => Some(twelve_hour(hour).to_string()),
        "A" => Some(locale::time_of_day(locale, gregorian_hour).to_string()),
        "a" => Some(locale::time_of_day(locale, gregorian_hour).to_lowercase()),
        _ => view.token(word),
    })
}

/// Format a Gregorian date. Invalid dates render as [`INVALID_DATE`].
///
/// # Examples
///
/// ```
/// use qen::format::format_gregorian;
/// use qen::{GregorianDate, Locale};
///
/// let date = GregorianDate::from_ymd(2022, 3, 17).add_hours(15);
/// assert_eq!(format_gregorian(&date, "DDDD MMMM d, h:mm A", Locale::English), "Thursday March 17, 3:00 PM");
/// ```
pub fn format_gregorian(date: &GregorianDate, template: &str, locale: Locale) -> String {
    let Some(instant) = date.instant() else {
        return INVALID_DATE.to_string();
    };
    let view = View {
        year: instant.year(),
        month: instant.month(),
        day: instant.day(),
        month_name: locale::gregorian_month_name(locale, instant.month()).unwrap_or_default(),
        weekday_name: weekday(locale, &instant),
        instant,
    };
    let hour = instant.hour();

    render(template, |word| match word {
        "HH" => Some(format!("{hour:02}")),
        "H" => Some(hour.to_string()),
        "hh" => Some(format!("{:02}", twelve_hour(hour))),
        "h" => Some(twelve_hour(hour).to_string()),
        "A" => Some(locale::meridiem(locale, hour, true).to_string()),
        "a" => Some(locale::meridiem(locale, hour, false).to_string()),
        _ => view.token(word),
    })
}

fn weekday(locale: Locale, instant: &NaiveDateTime) -> &'static str {
    locale::weekday_name(locale, instant.weekday().num_days_from_sunday()).unwrap_or_default()
}

// ── Tests ───────────────────────────────────────────────────────────────────
