use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use qen::{jdn, EthiopianDate, GregorianDate, Locale};

fn conversion_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("jdn/ethiopian_to_gregorian", |b| {
        b.iter(|| jdn::ethiopian_to_gregorian(black_box(2016), black_box(13), black_box(5)))
    });

    group.bench_function("date/gregorian_to_ethiopian", |b| {
        let date = GregorianDate::from_ymd(2025, 3, 22);
        b.iter(|| black_box(date).to_ethiopian())
    });

    group.bench_function("date/parse_ethiopian", |b| {
        b.iter(|| EthiopianDate::new(black_box("2014-07-08 3:30")))
    });

    group.finish();
}

fn arithmetic_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let start = EthiopianDate::from_ymd(2010, 1, 1);
    let end = EthiopianDate::from_ymd(2016, 3, 15);

    group.bench_function("add_months", |b| {
        b.iter(|| black_box(start).add_months(black_box(27)))
    });

    group.bench_function("difference/all", |b| {
        b.iter(|| black_box(start).difference(&end, Default::default()))
    });

    group.bench_function("format", |b| {
        b.iter(|| black_box(end).format("DDDD, MMMM dd YYYY HH:mm A", Locale::English))
    });

    group.finish();
}

criterion_group!(benches, conversion_benches, arithmetic_benches);
criterion_main!(benches);
