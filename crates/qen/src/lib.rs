//! # qen
//!
//! Ethiopian ⇄ Gregorian calendar engine.
//!
//! Converts dates between the Ethiopian (Amete Mihret) and Gregorian
//! calendars through the Julian Day Number, does calendar-aware arithmetic in
//! either calendar (13-month Ethiopian years with a 5/6-day Pagume), measures
//! differences with the anniversary rule, and renders dates, differences and
//! relative times in Amharic or English.
//!
//! ## Modules
//!
//! - [`jdn`] — Julian Day Number conversions for both calendars
//! - [`calendar`] — Ethiopian leap rule, month lengths, Ethiopian clock
//! - [`ethiopian`](mod@ethiopian) / [`gregorian`](mod@gregorian) — immutable date values
//! - [`diff`](mod@diff) — calendar-aware differences
//! - [`relative`] — "in 2 days" / "3 years ago" phrasing
//! - [`format`](mod@format) — token templates
//! - [`parse`] — date strings and components
//! - [`locale`] — Amharic and English labels
//! - [`unit`] — arithmetic and difference units
//! - [`clock`] — injectable source of "now"
//! - [`error`] — Error types

#[macro_use]
mod logging;

mod api;
pub mod calendar;
pub mod clock;
pub mod diff;
pub mod error;
pub mod ethiopian;
pub mod format;
pub mod gregorian;
pub mod jdn;
pub mod locale;
pub mod parse;
pub mod relative;
pub mod unit;

pub use api::{
    diff, diff_string, ethiopian, ethiopian_night, ethiopian_now, format, from_gregorian,
    gregorian, gregorian_now, is_ethiopian_date, is_gregorian_date, to_gregorian, AnyDate,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use diff::{CalendarDifference, Difference, FullDifference, MonthsDifference, WeeksDifference};
pub use error::QenError;
pub use ethiopian::EthiopianDate;
pub use gregorian::GregorianDate;
pub use locale::Locale;
pub use parse::{DateComponents, DateInput};
pub use relative::{DiffStringOptions, RelativeTimeOptions};
pub use unit::{DiffUnit, Unit};
