//! Criterion micro-benchmarks for field queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use reef_arena::{Field, Population};
use reef_core::{Location, Organism, Species};
use reef_space::Grid;
use reef_test_utils::seeded_rng;

fn half_full() -> (Field, Population) {
    let grid = Grid::new(100, 100).unwrap();
    let mut field = Field::new(grid);
    let mut population = Population::new();
    for loc in grid.canonical_ordering() {
        if (loc.row() + loc.col()) % 2 == 0 {
            let id = population.spawn(Organism::plant(Species::Algae, loc));
            field.place(id, loc);
        }
    }
    (field, population)
}

/// Benchmark: shuffled adjacency for every cell of a 100x100 field.
fn bench_adjacent_10k(c: &mut Criterion) {
    let (field, _) = half_full();
    let mut rng = seeded_rng(1);
    c.bench_function("adjacent_locations_10k", |b| {
        b.iter(|| {
            for r in 0..100 {
                for col in 0..100 {
                    black_box(field.adjacent_locations(&Location::new(r, col), &mut rng));
                }
            }
        });
    });
}

/// Benchmark: free adjacency for every cell of a half-occupied field.
fn bench_free_adjacent_10k(c: &mut Criterion) {
    let (field, population) = half_full();
    let mut rng = seeded_rng(1);
    c.bench_function("free_adjacent_locations_10k", |b| {
        b.iter(|| {
            for r in 0..100 {
                for col in 0..100 {
                    let here = Location::new(r, col);
                    let free = field.free_adjacent_locations(&here, &population, &mut rng);
                    black_box(free.len());
                }
            }
        });
    });
}

/// Benchmark: full-field statistics and digest.
fn bench_stats_and_digest(c: &mut Criterion) {
    let (field, population) = half_full();
    c.bench_function("stats_10k", |b| b.iter(|| black_box(field.stats(&population))));
    c.bench_function("digest_10k", |b| {
        b.iter(|| black_box(reef_arena::field_digest(&field, &population)))
    });
}

criterion_group!(
    benches,
    bench_adjacent_10k,
    bench_free_adjacent_10k,
    bench_stats_and_digest
);
criterion_main!(benches);
