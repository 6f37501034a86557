//! Criterion benchmarks for the linear-scan recommenders.
//!
//! Measures a full gas, rest and lodging pass across catalogue sizes to track
//! the cost of the linear scan as source lists grow.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waystop-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waystop_core::{
    Category, PoiCatalogue, PointOfInterest, RecommendConfig, TripState, recommend_for_trip,
};

/// Seed for deterministic random number generation in benchmarks.
const BENCHMARK_SEED: u64 = 42;

/// Stops per category.
const CATALOGUE_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Half-width of the square the stops are scattered over (in degrees).
const SPREAD_DEGREES: f64 = 5.0;

/// Traveller position used for every request, near Irvine, California.
const START: Coord<f64> = Coord {
    x: -117.749_534,
    y: 33.507_611,
};

fn scatter(rng: &mut ChaCha8Rng, count: usize, category: &Category) -> Vec<PointOfInterest> {
    (0..count)
        .map(|_| {
            let location = Coord {
                x: START.x + rng.gen_range(-SPREAD_DEGREES..SPREAD_DEGREES),
                y: START.y + rng.gen_range(-SPREAD_DEGREES..SPREAD_DEGREES),
            };
            PointOfInterest::unnamed(location, category.clone())
        })
        .collect()
}

fn generate_catalogue(size: usize, seed: u64) -> PoiCatalogue {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    PoiCatalogue {
        gas: scatter(&mut rng, size, &Category::Fuel),
        rest: scatter(&mut rng, size, &Category::Rest),
        lodging: scatter(&mut rng, size, &Category::Hotel),
    }
}

fn bench_recommend_for_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_for_trip");
    let config = RecommendConfig::default();
    let Ok(trip) = TripState::new(START, 150.0, 4.0, true) else {
        return;
    };

    for &size in CATALOGUE_SIZES {
        // Pre-generate inputs outside the benchmark loop.
        let catalogue = generate_catalogue(size, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(
            u64::try_from(catalogue.len()).unwrap_or(u64::MAX),
        ));
        group.bench_with_input(BenchmarkId::new("stops", size), &catalogue, |b, cat| {
            b.iter(|| recommend_for_trip(&trip, cat, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend_for_trip);
criterion_main!(benches);
