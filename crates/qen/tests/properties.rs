use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use qen::calendar;
use qen::jdn;
use qen::{DateComponents, EthiopianDate, GregorianDate, Unit};

fn gregorian_day() -> impl Strategy<Value = NaiveDate> {
    // 1600-01-01 ..= 2400-12-31 as days from the common era.
    (584_023i32..=876_582).prop_map(|n| NaiveDate::from_num_days_from_ce_opt(n).unwrap())
}

fn any_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(vec![
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ])
}

fn ethiopian_day() -> impl Strategy<Value = EthiopianDate> {
    // Days 1-5 exist in every month, Pagume included, so nothing clamps.
    (1900i32..2100, 1u32..=13, 1u32..=5)
        .prop_map(|(year, month, day)| EthiopianDate::from_ymd(year, month, day))
}

proptest! {
    #[test]
    fn jdn_round_trips_gregorian(day in gregorian_day()) {
        let jdn = jdn::gregorian_to_jdn(i64::from(day.year()), day.month(), day.day());
        prop_assert_eq!(
            jdn::jdn_to_gregorian(jdn),
            (i64::from(day.year()), day.month(), day.day())
        );
    }

    #[test]
    fn jdn_round_trips_ethiopian(jdn in 2_000_000i64..3_000_000) {
        let (y, m, d) = jdn::jdn_to_ethiopian(jdn);
        prop_assert!(calendar::validate_ethiopian(y, m, d).is_ok());
        prop_assert_eq!(jdn::ethiopian_to_jdn(y, m, d), jdn);
    }

    #[test]
    fn cross_calendar_round_trip(day in gregorian_day(), hour in 0u32..24, minute in 0u32..60) {
        let gregorian = GregorianDate::new(
            DateComponents::new(day.year(), day.month(), day.day()).with_time(hour, minute, 0, 0),
        );
        let ethiopian = gregorian.to_ethiopian();
        prop_assert!(ethiopian.is_valid());
        prop_assert_eq!(ethiopian.to_gregorian(), gregorian);

        let (eth_hour, night) = (ethiopian.hour().unwrap(), ethiopian.is_night().unwrap());
        let rebuilt = EthiopianDate::try_new(
            DateComponents::new(
                ethiopian.year().unwrap(),
                ethiopian.month().unwrap(),
                ethiopian.day().unwrap(),
            )
            .with_time(eth_hour, minute, 0, 0),
            night,
        )
        .unwrap();
        prop_assert_eq!(rebuilt, ethiopian);
    }

    #[test]
    fn pagume_6_exists_only_in_leap_years(year in -3000i64..3000) {
        let leap = year.rem_euclid(4) == 3;
        prop_assert_eq!(calendar::validate_ethiopian(year, 13, 6).is_ok(), leap);
        prop_assert!(calendar::validate_ethiopian(year, 13, 5).is_ok());
    }

    #[test]
    fn gregorian_add_then_subtract_is_identity(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        amount in -500i64..500,
        unit in any_unit(),
    ) {
        // February has 28 days, so no day clamps.
        let g = GregorianDate::from_ymd(year, month, day);
        prop_assert_eq!(g.add_unit(amount, unit).subtract_unit(amount, unit), g);
    }

    #[test]
    fn ethiopian_add_then_subtract_is_identity(
        date in ethiopian_day(),
        amount in -500i64..500,
        unit in any_unit(),
    ) {
        prop_assert_eq!(date.add_unit(amount, unit).subtract_unit(amount, unit), date);
    }

    #[test]
    fn huge_shifts_are_invalid_or_reversible(
        date in ethiopian_day(),
        amount in prop_oneof![any::<i64>(), Just(i64::MAX), Just(i64::MIN), -1_000_000i64..1_000_000],
        unit in any_unit(),
    ) {
        let there = date.add_unit(amount, unit);
        if there.is_valid() {
            prop_assert_eq!(there.subtract_unit(amount, unit), date);
        }
        let g = date.to_gregorian();
        let there = g.add_unit(amount, unit);
        if there.is_valid() {
            prop_assert_eq!(there.subtract_unit(amount, unit), g);
        }
    }

    #[test]
    fn difference_is_symmetric(
        a in gregorian_day(),
        b in gregorian_day(),
    ) {
        let (a, b) = (GregorianDate::from_ymd(a.year(), a.month(), a.day()),
                      GregorianDate::from_ymd(b.year(), b.month(), b.day()));
        let forward = a.difference(&b, Default::default()).unwrap();
        let backward = b.difference(&a, Default::default()).unwrap();
        prop_assert_eq!(forward.record().unwrap().full, backward.record().unwrap().full);
        let months = forward.record().unwrap().full.months;
        prop_assert!((0..12).contains(&months));
    }
}
