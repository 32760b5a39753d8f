//! Benchmarks for wind direction extraction and period finding.
//!
//! Run with: cargo bench --package wind-direction --bench finder_benchmarks

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use wind_direction::{
    DirectionGrid, DirectionSeries, FinderConfig, SectorExtractor, TermTable, WindDirection,
    WindDirectionPeriodFinder,
};

/// Generate a direction field of 16-sector values around `base`.
fn generate_direction_grid(width: usize, height: usize, base: f64) -> DirectionGrid {
    let mut rng = rand::thread_rng();
    let values = (0..width * height)
        .map(|_| {
            let offset = rng.gen_range(-2i32..=2) as f64 * 22.5;
            (base + offset).rem_euclid(360.0)
        })
        .collect();
    DirectionGrid::new(width, height, values).unwrap()
}

/// Hourly series whose dominant direction veers one sector every `hold` terms.
fn generate_veering_series(terms: usize, size: usize, hold: usize) -> DirectionSeries {
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let times = (0..terms)
        .map(|i| start + Duration::hours(i as i64))
        .collect();
    let grids = (0..terms)
        .map(|i| generate_direction_grid(size, size, (i / hold) as f64 * 22.5))
        .collect();
    DirectionSeries::new(times, grids).unwrap()
}

// =============================================================================
// SECTOR EXTRACTION BENCHMARKS
// =============================================================================

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sector_extraction");

    for size in [64, 256, 512] {
        let grid = generate_direction_grid(size, size, 90.0);
        group.throughput(Throughput::Elements((size * size) as u64));

        for percent in [50.0, 100.0] {
            let extractor = SectorExtractor::new(percent);
            group.bench_with_input(
                BenchmarkId::new(format!("percent_{}", percent), size),
                &grid,
                |b, grid| b.iter(|| black_box(extractor.extract(black_box(grid)))),
            );
        }
    }

    group.finish();
}

// =============================================================================
// SEGMENTATION BENCHMARKS
// =============================================================================

fn bench_find_periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_periods");
    let finder = WindDirectionPeriodFinder::default();
    let start = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();

    for terms in [24, 96, 384] {
        let times: Vec<_> = (0..terms)
            .map(|i| start + Duration::hours(i as i64))
            .collect();
        let directions = (0..terms)
            .map(|i| WindDirection::new([((i / 5) as f64 * 45.0) % 360.0]).ok())
            .collect();
        let table = TermTable::from_directions(&times, directions).unwrap();

        group.throughput(Throughput::Elements(terms as u64));
        group.bench_with_input(BenchmarkId::from_parameter(terms), &table, |b, table| {
            b.iter(|| black_box(finder.find_periods(black_box(table))))
        });
    }

    group.finish();
}

// =============================================================================
// FULL PIPELINE BENCHMARKS
// =============================================================================

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder_run");
    group.sample_size(20);

    let series = generate_veering_series(48, 128, 6);

    for parallel in [false, true] {
        let finder = WindDirectionPeriodFinder::new(FinderConfig {
            parallel_extraction: parallel,
            ..FinderConfig::default()
        });
        let name = if parallel { "parallel" } else { "sequential" };

        group.bench_function(name, |b| {
            b.iter(|| black_box(finder.run(black_box(&series), None).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_find_periods, bench_run);
criterion_main!(benches);
