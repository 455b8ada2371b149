//! Benchmarks for the anomaly processor.
//!
//! Run with: cargo bench --package hydro-processor
//! Or: cargo bench --package hydro-processor --bench extract_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hydro_geo::ReferenceData;
use hydro_processor::{aggregate, estimate_trend, extract, is_inside, Labeler, Snapshot};
use test_utils::{create_random_grid, linear_means};

// =============================================================================
// CONTAINMENT BENCHMARKS
// =============================================================================

fn bench_is_inside(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_inside");
    let reference = ReferenceData::builtin();

    for key in ["ghana", "kenya", "india"] {
        let Ok(boundary) = reference.boundary(key) else {
            continue;
        };
        let (lat, lon) = reference.center(key).unwrap_or((0.0, 0.0));
        let ring = boundary.exterior_ring();

        group.bench_with_input(BenchmarkId::new("center", key), &ring, |b, ring| {
            b.iter(|| is_inside(black_box(lat), black_box(lon), ring))
        });
    }

    group.finish();
}

// =============================================================================
// EXTRACTION BENCHMARKS
// =============================================================================

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let reference = ReferenceData::builtin();
    let mut rng = StdRng::seed_from_u64(42);

    // Ghana extent at three resolutions
    for step in [0.5, 0.25, 0.1] {
        let lat_count = (7.0 / step) as usize + 1;
        let lon_count = (5.0 / step) as usize + 1;
        let grid = create_random_grid(&mut rng, 4.5, -3.5, step, lat_count, lon_count, 0.05);

        let country = match reference.country("ghana") {
            Ok(country) => country,
            Err(_) => continue,
        };
        let labeler = Labeler::new(&country.localities);

        group.throughput(Throughput::Elements((lat_count * lon_count) as u64));
        group.bench_with_input(
            BenchmarkId::new("ghana", format!("{}x{}", lat_count, lon_count)),
            &grid,
            |b, grid| b.iter(|| extract(black_box(grid), &country.boundary, 100.0, &labeler)),
        );
    }

    group.finish();
}

// =============================================================================
// AGGREGATION / TREND BENCHMARKS
// =============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let reference = ReferenceData::builtin();
    let Ok(country) = reference.country("india") else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(7);
    let grid = create_random_grid(&mut rng, 6.0, 68.0, 0.25, 129, 121, 0.0);
    let points = extract(&grid, &country.boundary, 100.0, &Labeler::new(&[])).points;

    c.bench_function("aggregate_india_quarter_degree", |b| {
        b.iter(|| aggregate(black_box(&points), &country.regions))
    });
}

fn bench_trend(c: &mut Criterion) {
    let start = chrono::NaiveDate::from_ymd_opt(2002, 4, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let grid = create_random_grid(&mut rng, 0.0, 0.0, 1.0, 2, 2, 0.0);
    let series: Vec<Snapshot> = linear_means(start, 240, 0.0, -0.002)
        .into_iter()
        .map(|(date, mean)| Snapshot::new(date, grid.clone()).with_mean(mean))
        .collect();

    c.bench_function("estimate_trend_240", |b| {
        b.iter(|| estimate_trend(black_box(&series), 12))
    });
}

criterion_group!(benches, bench_is_inside, bench_extract, bench_aggregate, bench_trend);
criterion_main!(benches);
