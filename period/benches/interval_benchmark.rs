use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use period::{Interval, Sequence};

fn origin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap()
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    let year = Interval::after(origin(), TimeDelta::days(366)).unwrap();
    group.bench_function("year_by_hour", |b| {
        b.iter(|| black_box(year.split(TimeDelta::hours(1)).unwrap().count()));
    });
    group.bench_function("year_by_hour_backwards", |b| {
        b.iter(|| black_box(year.split_backwards(TimeDelta::hours(1)).unwrap().count()));
    });

    group.finish();
}

fn bench_pairwise_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_algebra");

    let a = Interval::half_open(origin(), origin() + TimeDelta::hours(3)).unwrap();
    let b = Interval::half_open(origin() + TimeDelta::hours(1), origin() + TimeDelta::hours(4)).unwrap();
    group.bench_function("intersect", |bench| {
        bench.iter(|| black_box(a).intersect(black_box(&b)));
    });
    group.bench_function("diff", |bench| {
        bench.iter(|| black_box(a).diff(black_box(&b)));
    });

    group.finish();
}

fn sequence_of(count: i64) -> Sequence {
    (0..count)
        .map(|i| {
            let start = origin() + TimeDelta::minutes(i * 45);
            Interval::after(start, TimeDelta::minutes(30 + (i % 4) * 10)).unwrap()
        })
        .collect()
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for count in [10i64, 100, 1000] {
        let sequence = sequence_of(count);
        group.bench_with_input(BenchmarkId::new("get_gaps", count), &sequence, |b, input| {
            b.iter(|| input.get_gaps());
        });
        group.bench_with_input(
            BenchmarkId::new("get_intersections", count),
            &sequence,
            |b, input| {
                b.iter(|| input.get_intersections());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_pairwise_algebra, bench_sequence);
criterion_main!(benches);
