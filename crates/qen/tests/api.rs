use chrono::{NaiveDate, NaiveDateTime};
use qen::{
    diff, diff_string, ethiopian, format, from_gregorian, gregorian, to_gregorian, AnyDate,
    DateComponents, DiffStringOptions, EthiopianDate, FixedClock, GregorianDate, Locale,
    QenError, RelativeTimeOptions, Unit,
};

fn civil(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

// ── Conversion ──────────────────────────────────────────────────────────────

#[test]
fn test_megabit_8_2014() {
    let date = ethiopian("2014-07-08");
    assert_eq!(date.format("YYYY-MM-dd", Locale::English), "2014-07-08");
    assert_eq!(to_gregorian(&date), Some(civil(2022, 3, 17, 6)));
    assert_eq!(date.to_gregorian().format("YYYY-MM-dd", Locale::English), "2022-03-17");
}

#[test]
fn test_known_conversions() {
    let cases = [
        ((1970, 1, 2), (1962, 4, 24)),
        ((2025, 3, 22), (2017, 7, 13)),
        ((2023, 9, 12), (2016, 1, 1)),
        ((2024, 9, 11), (2017, 1, 1)),
        ((2023, 9, 11), (2015, 13, 6)),
    ];
    for ((gy, gm, gd), (ey, em, ed)) in cases {
        let date = from_gregorian((gy, gm, gd));
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (Some(ey), Some(em), Some(ed)),
            "{gy}-{gm}-{gd}"
        );
        let back = EthiopianDate::from_ymd(ey, em, ed).to_gregorian();
        assert_eq!((back.year(), back.month(), back.day()), (Some(gy), Some(gm), Some(gd)));
    }
}

#[test]
fn test_pagume_6_follows_leap_rule() {
    assert!(ethiopian((2015, 13, 6)).is_valid());
    assert!(!ethiopian((2016, 13, 6)).is_valid());
    assert!(matches!(
        EthiopianDate::try_new((2016, 13, 6), false),
        Err(QenError::UnrepresentableDate(_))
    ));
}

// ── Arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn test_pagume_month_rollover() {
    let next = ethiopian((2016, 13, 5)).add(1, "month").unwrap();
    assert_eq!((next.year(), next.month(), next.day()), (Some(2017), Some(1), Some(5)));
}

#[test]
fn test_add_subtract_inverse_for_every_unit() {
    let e = ethiopian(DateComponents::new(2016, 4, 12).with_time(7, 15, 30, 125));
    let g = gregorian(DateComponents::new(2024, 6, 12).with_time(7, 15, 30, 125));
    for unit in [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ] {
        for n in [1, 5, 40, -3] {
            assert_eq!(e.add_unit(n, unit).subtract_unit(n, unit), e, "{n} {unit}");
            assert_eq!(g.add_unit(n, unit).subtract_unit(n, unit), g, "{n} {unit}");
        }
    }
}

// ── Differences ─────────────────────────────────────────────────────────────

#[test]
fn test_gregorian_years_between() {
    let a = AnyDate::from(gregorian("2020-03-01"));
    let b = AnyDate::from(gregorian("2025-02-28"));
    assert_eq!(diff(&a, &b, "year").unwrap().value(), Some(4));
    assert_eq!(diff(&b, &a, "Years").unwrap().value(), Some(4));
}

#[test]
fn test_diff_all_record() {
    let a = AnyDate::from(ethiopian("2010-01-01"));
    let b = AnyDate::from(ethiopian("2016-03-15 2:30"));
    let record = *diff(&a, &b, "all").unwrap().record().unwrap();
    assert_eq!(record.full.years, 6);
    assert_eq!(record.full.months, 2);
    assert_eq!(record.full.days, 14);
    assert_eq!(record.full.hours, 2);
    assert_eq!(record.full.minutes, 30);
    assert_eq!(record.by_months.months, 6 * 13 + 2);
    assert!(record.is_future);
}

#[test]
fn test_diff_string_entry_point() {
    let a = AnyDate::from(ethiopian("2010-01-01"));
    let b = AnyDate::from(ethiopian("2016-03-15"));
    let latin = DiffStringOptions {
        unit: None,
        use_latin: true,
    };
    assert_eq!(
        diff_string(&a, &b, &latin).unwrap(),
        "6 years, 2 months, 14 days"
    );
    assert_eq!(
        diff_string(&a, &b, &DiffStringOptions::default()).unwrap(),
        "6 ዓመት, 2 ወር, 14 ቀን"
    );
}

#[test]
fn test_cross_calendar_pair_is_mismatch() {
    let e = AnyDate::from(ethiopian("2014-07-08"));
    let g = AnyDate::from(gregorian("2022-03-17"));
    let err = diff(&e, &g, "days").unwrap_err();
    assert!(matches!(err, QenError::CalendarMismatch(_)), "got: {err}");
}

// ── Formatting ──────────────────────────────────────────────────────────────

#[test]
fn test_invalid_date_formats_as_invalid() {
    let date = AnyDate::from(ethiopian("invalid-date"));
    assert!(!date.is_valid());
    assert_eq!(format(&date, "YYYY-MM-dd", Locale::English), "Invalid Date");
    assert_eq!(format(&date, "MMMM", Locale::Amharic), "Invalid Date");
}

#[test]
fn test_locale_aliases_drive_labels() {
    let date = AnyDate::from(ethiopian("2014-07-08"));
    assert_eq!(format(&date, "MMMM", Locale::from_alias("en")), "Megabit");
    assert_eq!(format(&date, "MMMM", Locale::from_alias("amh")), "መጋቢት");
    assert_eq!(format(&date, "MMMM", Locale::from_alias("xx")), "መጋቢት");
}

// ── Relative time ───────────────────────────────────────────────────────────

#[test]
fn test_relative_time_against_fixed_clock() {
    let now = civil(2025, 3, 22, 12);
    let clock = FixedClock(now);
    let options = RelativeTimeOptions::with_locale(Locale::English);

    let same = GregorianDate::from_instant(now);
    assert_eq!(same.from_now(&clock, &options).unwrap(), "now");
    assert_eq!(same.add_days(-1).from_now(&clock, &options).unwrap(), "1 day ago");
    assert_eq!(same.add_days(1).from_now(&clock, &options).unwrap(), "in 1 day");

    let amharic = RelativeTimeOptions::default();
    let ethiopian_now = EthiopianDate::now(&clock);
    assert_eq!(ethiopian_now.from_now(&clock, &amharic).unwrap(), "አሁን");
    assert_eq!(
        ethiopian_now.add_days(-2).from_now(&clock, &amharic).unwrap(),
        "ከ 2 ቀን በፊት"
    );
    assert_eq!(
        ethiopian_now.add_days(2).from_now(&clock, &amharic).unwrap(),
        "ከ 2 ቀን በኋላ"
    );
}

#[test]
fn test_relative_time_on_invalid_date() {
    let clock = FixedClock(civil(2025, 3, 22, 12));
    let err = EthiopianDate::invalid()
        .from_now(&clock, &RelativeTimeOptions::default())
        .unwrap_err();
    assert_eq!(err, QenError::InvalidDate);
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn test_components_json_round_trip_into_date() {
    let components = DateComponents::from_json(r#"{"year": 2014, "month": 7, "day": 8}"#).unwrap();
    assert_eq!(ethiopian(components), ethiopian("2014-07-08"));
    let json = serde_json::to_string(&components).unwrap();
    assert!(json.contains("\"month\":7"), "got: {json}");
}
