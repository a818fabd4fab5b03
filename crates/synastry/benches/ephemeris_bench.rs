use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use synastry::ephemeris::GeoLocation;
use synastry::{ChartBuilder, SynastryEngine};

fn bench_build_chart(c: &mut Criterion) {
    let builder = ChartBuilder::default();
    let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
    let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
    let location = GeoLocation {
        lat: 40.7128,
        lon: -74.0060,
    };

    c.bench_function("build_chart", |b| {
        b.iter(|| builder.build(black_box(date), black_box(time), black_box(location)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let builder = ChartBuilder::default();
    let time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
    let a = builder
        .build(
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            time,
            GeoLocation { lat: 36.7378, lon: -119.7871 },
        )
        .unwrap();
    let b = builder
        .build(
            NaiveDate::from_ymd_opt(1992, 11, 3).unwrap(),
            time,
            GeoLocation { lat: 51.5074, lon: -0.1278 },
        )
        .unwrap();
    let engine = SynastryEngine::default();

    c.bench_function("compare", |bench| {
        bench.iter(|| engine.compare(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_build_chart, bench_compare);
criterion_main!(benches);
