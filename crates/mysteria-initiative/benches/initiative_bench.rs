//! Benchmarks for the initiative threshold schedule
//!
//! Measures performance of:
//! - Turns to threshold lookup
//! - Initiative to turns inversion
//! - Threshold table construction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mysteria_initiative::{
    min_initiative_for_turns, parse_initiative, thresholds_for, turns_from_initiative,
    ThresholdSchedule, SAFETY_MAX_TURNS,
};

/// Benchmark turn count to threshold at seed and extrapolated levels
fn bench_min_initiative(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_initiative_for_turns");

    for &turns in &[1i64, 9, 10, 100, 1000, 2000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(turns), &turns, |b, &t| {
            b.iter(|| min_initiative_for_turns(black_box(t)))
        });
    }
    group.finish();
}

/// Benchmark initiative to turn count inversion
fn bench_turns_from_initiative(c: &mut Criterion) {
    let mut group = c.benchmark_group("turns_from_initiative");

    for &initiative in &[0.0f64, 34.0, 254.0, 305.0, 50_000.0, 10_005_030.0] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(initiative),
            &initiative,
            |b, &ini| b.iter(|| turns_from_initiative(black_box(ini))),
        );
    }
    group.finish();
}

/// Benchmark full round trip across the schedule domain
fn bench_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_full_domain", |b| {
        b.iter(|| {
            for x in 1..=i64::from(SAFETY_MAX_TURNS) {
                let t = min_initiative_for_turns(black_box(x));
                black_box(turns_from_initiative(t as f64));
            }
        })
    });
}

/// Benchmark table construction
fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("thresholds_for");

    for &count in &[9i64, 12, 100, 2000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| thresholds_for(black_box(n)))
        });
    }
    group.finish();

    let schedule = ThresholdSchedule::STANDARD;
    c.bench_function("ladder_full", |b| {
        b.iter(|| schedule.ladder().map(|r| r.threshold).sum::<u64>())
    });
}

/// Benchmark form text parsing
fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_initiative", |b| {
        b.iter(|| parse_initiative(black_box("  304.5 Punkte")))
    });
}

criterion_group!(
    benches,
    bench_min_initiative,
    bench_turns_from_initiative,
    bench_roundtrip,
    bench_tables,
    bench_parse,
);

criterion_main!(benches);
