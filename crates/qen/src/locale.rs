//! Label tables for the two bundled locales.
//!
//! [`Locale::Amharic`] renders in Ethiopic script and is the default.
//! [`Locale::English`] renders in Latin script: Ethiopian month names are
//! transliterated, everything else is English.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QenError;
use crate::unit::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Amharic,
    English,
}

impl Locale {
    /// Resolve a language alias, falling back to the default for unknown ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use qen::Locale;
    ///
    /// assert_eq!(Locale::from_alias("eng"), Locale::English);
    /// assert_eq!(Locale::from_alias("amh"), Locale::Amharic);
    /// assert_eq!(Locale::from_alias("klingon"), Locale::Amharic);
    /// ```
    pub fn from_alias(alias: &str) -> Locale {
        alias.parse().unwrap_or_default()
    }

    /// The Latin-script locale when `use_latin` is set, otherwise the default.
    pub fn latin_if(use_latin: bool) -> Locale {
        if use_latin {
            Locale::English
        } else {
            Locale::Amharic
        }
    }
}

impl FromStr for Locale {
    type Err = QenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "am" | "amh" | "amharic" | "eth" | "ethiopian" => Ok(Locale::Amharic),
            "en" | "eng" | "english" => Ok(Locale::English),
            other => Err(QenError::InvalidInput(format!("unknown locale '{other}'"))),
        }
    }
}

// ── Calendar labels ─────────────────────────────────────────────────────────

const ETHIOPIAN_MONTHS_AM: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

const ETHIOPIAN_MONTHS_EN: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

const GREGORIAN_MONTHS_AM: [&str; 12] = [
    "ጃንዋሪ",
    "ፌብሩዋሪ",
    "ማርች",
    "ኤፕሪል",
    "ሜይ",
    "ጁን",
    "ጁላይ",
    "ኦገስት",
    "ሴፕቴምበር",
    "ኦክቶበር",
    "ኖቬምበር",
    "ዲሴምበር",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS_AM: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Ethiopian month name for a 1-based month.
pub fn ethiopian_month_name(locale: Locale, month: u32) -> Option<&'static str> {
    let table = match locale {
        Locale::Amharic => &ETHIOPIAN_MONTHS_AM,
        Locale::English => &ETHIOPIAN_MONTHS_EN,
    };
    table.get(month.checked_sub(1)? as usize).copied()
}

/// Gregorian month name for a 1-based month.
pub fn gregorian_month_name(locale: Locale, month: u32) -> Option<&'static str> {
    let table = match locale {
        Locale::Amharic => &GREGORIAN_MONTHS_AM,
        Locale::English => &GREGORIAN_MONTHS_EN,
    };
    table.get(month.checked_sub(1)? as usize).copied()
}

/// Weekday name, 0 = Sunday.
pub fn weekday_name(locale: Locale, weekday: u32) -> Option<&'static str> {
    let table = match locale {
        Locale::Amharic => &WEEKDAYS_AM,
        Locale::English => &WEEKDAYS_EN,
    };
    table.get(weekday as usize).copied()
}

/// Time-of-day label for a Gregorian hour: morning 06–11, afternoon 12–17,
/// evening 18–23, night 00–05.
pub fn time_of_day(locale: Locale, gregorian_hour: u32) -> &'static str {
    match (locale, gregorian_hour) {
        (Locale::Amharic, 6..=11) => "ጠዋት",
        (Locale::Amharic, 12..=17) => "ከሰዓት",
        (Locale::Amharic, 18..=23) => "ምሽት",
        (Locale::Amharic, _) => "ለሊት",
        (Locale::English, 6..=11) => "Morning",
        (Locale::English, 12..=17) => "Afternoon",
        (Locale::English, 18..=23) => "Evening",
        (Locale::English, _) => "Night",
    }
}

/// Meridiem marker for a Gregorian hour.
pub fn meridiem(locale: Locale, gregorian_hour: u32, uppercase: bool) -> &'static str {
    let pm = gregorian_hour >= 12;
    match (locale, pm, uppercase) {
        (Locale::Amharic, false, _) => "ጥዋት",
        (Locale::Amharic, true, _) => "ከሰዓት",
        (Locale::English, false, true) => "AM",
        (Locale::English, true, true) => "PM",
        (Locale::English, false, false) => "am",
        (Locale::English, true, false) => "pm",
    }
}

// ── Duration labels ─────────────────────────────────────────────────────────

/// Label for `count` of `unit`, pluralized where the language inflects.
///
/// Amharic counts do not inflect the noun (`2 ቀን`).
pub fn unit_label(locale: Locale, unit: Unit, count: i64) -> String {
    match locale {
        Locale::Amharic => {
            let noun = match unit {
                Unit::Year => "ዓመት",
                Unit::Month => "ወር",
                Unit::Week => "ሳምንት",
                Unit::Day => "ቀን",
                Unit::Hour => "ሰዓት",
                Unit::Minute => "ደቂቃ",
                Unit::Second => "ሴኮንድ",
                Unit::Millisecond => "ሚሊሴኮንድ",
            };
            format!("{count} {noun}")
        }
        Locale::English => {
            let suffix = if count == 1 { "" } else { "s" };
            format!("{count} {unit}{suffix}")
        }
    }
}

/// Wrap a quantity phrase with future-direction wording.
pub fn future_phrase(locale: Locale, quantity: &str) -> String {
    match locale {
        Locale::Amharic => format!("ከ {quantity} በኋላ"),
        Locale::English => format!("in {quantity}"),
    }
}

/// Wrap a quantity phrase with past-direction wording.
pub fn past_phrase(locale: Locale, quantity: &str) -> String {
    match locale {
        Locale::Amharic => format!("ከ {quantity} በፊት"),
        Locale::English => format!("{quantity} ago"),
    }
}

/// Phrase used when two instants coincide.
pub fn same_instant(locale: Locale) -> &'static str {
    match locale {
        Locale::Amharic => "አሁን",
        Locale::English => "now",
    }
}

/// Phrase used when a rendered breakdown has no non-zero part.
pub fn same_time(locale: Locale) -> &'static str {
    match locale {
        Locale::Amharic => "ተመሳሳይ ጊዜ",
        Locale::English => "The same time",
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
