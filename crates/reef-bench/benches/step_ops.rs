//! Criterion benchmarks for whole ticks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use reef_bench::{crowded_profile, reference_profile, stress_profile};
use reef_engine::{NullObserver, Simulator};

/// Benchmark: one tick of the default 80x120 reef.
fn bench_step_reference(c: &mut Criterion) {
    let mut sim = Simulator::new(reference_profile(42)).unwrap();
    c.bench_function("step_reference_80x120", |b| {
        b.iter(|| {
            if !sim.is_viable() {
                sim.reset();
            }
            black_box(sim.step());
        });
    });
}

/// Benchmark: one tick on the crowded profile.
fn bench_step_crowded(c: &mut Criterion) {
    let mut sim = Simulator::new(crowded_profile(42)).unwrap();
    c.bench_function("step_crowded_80x120", |b| {
        b.iter(|| {
            if !sim.is_viable() {
                sim.reset();
            }
            black_box(sim.step());
        });
    });
}

/// Benchmark: construction and seeding of the stress profile.
fn bench_populate_stress(c: &mut Criterion) {
    c.bench_function("populate_stress_320x480", |b| {
        b.iter(|| black_box(Simulator::new(stress_profile(7)).unwrap()));
    });
}

/// Benchmark: 50 ticks from a fresh reference reef, observers disabled.
fn bench_simulate_50(c: &mut Criterion) {
    c.bench_function("simulate_50_reference", |b| {
        b.iter_batched(
            || Simulator::new(reference_profile(3)).unwrap(),
            |mut sim| black_box(sim.simulate(50, &mut NullObserver, &mut NullObserver)),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_crowded,
    bench_populate_stress,
    bench_simulate_50
);
criterion_main!(benches);
