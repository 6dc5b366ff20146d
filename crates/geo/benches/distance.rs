//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use volo_geo::{haversine_distance, try_haversine_distance, Coordinate};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Singapore
            let lat = 1.0 + (i as f64 * 0.01) % 1.0;
            let lng = 103.0 + (i as f64 * 0.01) % 1.0;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let singapore = Coordinate::new(1.3521, 103.8198);
    let marina_bay = Coordinate::new(1.2897, 103.8501);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&singapore), black_box(&marina_bay)))
    });

    c.bench_function("haversine_checked", |b| {
        b.iter(|| try_haversine_distance(black_box(&singapore), black_box(&marina_bay)))
    });
}

fn bench_many_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_distances");
    let origin = Coordinate::new(1.3521, 103.8198);

    for size in [10, 100, 1000, 10000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                points
                    .iter()
                    .map(|p| haversine_distance(black_box(&origin), black_box(p)))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_many_distances);
criterion_main!(benches);
