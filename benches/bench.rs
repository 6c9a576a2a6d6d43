// Criterion benchmarks for Stayfinder Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use stayfinder_algo::core::{distance::haversine_distance, fuzzy, LocationResolver, SearchEngine};
use stayfinder_algo::models::Property;
use stayfinder_algo::services::Catalog;

fn create_property(id: usize, lat: f64, lon: f64) -> Property {
    Property {
        name: format!("Property {}", id),
        latitude: lat,
        longitude: lon,
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(24.5854),
                black_box(73.7125),
                black_box(24.58145726),
                black_box(73.68223671),
            )
        });
    });
}

fn bench_resolver(c: &mut Criterion) {
    let catalog = Catalog::load_embedded().unwrap();
    let resolver = LocationResolver::new(catalog.reference_locations, fuzzy::MAX_EDIT_DISTANCE);

    c.bench_function("resolve_exact", |b| {
        b.iter(|| resolver.resolve(black_box("udaipur")));
    });

    c.bench_function("resolve_fuzzy", |b| {
        b.iter(|| resolver.resolve(black_box("udaipu")));
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolver.resolve(black_box("xyzzy")));
    });
}

fn bench_catalog_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_scan");

    for catalog_size in [23, 100, 1000, 10000].iter() {
        let properties: Vec<Property> = (0..*catalog_size)
            .map(|i| {
                let lat_offset = ((i % 100) as f64) * 0.01;
                let lon_offset = ((i / 100) as f64) * 0.01;
                create_property(i, 24.5854 + lat_offset, 73.7125 + lon_offset)
            })
            .collect();
        let engine = SearchEngine::new(Arc::new(properties), 50);

        group.bench_with_input(
            BenchmarkId::from_parameter(catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| engine.search(black_box(24.5854), black_box(73.7125)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_resolver,
    bench_catalog_scan
);
criterion_main!(benches);
