//! Benchmarks for the CFL time-step estimate.
//!
//! Run with: `cargo bench --bench time_step_bench`
//!
//! With `--features parallel` the rayon bound computation is measured too.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dg_compressible::config::{FreestreamReference, SolverSettings};
use dg_compressible::operators::ElementMetrics;
use dg_compressible::time::{SerialCommunicator, estimate_time_step, std_velocity_bounds};
use dg_compressible::types::{PointFields, SpaceDim};

#[cfg(feature = "parallel")]
use dg_compressible::time::max_std_velocity_parallel;

fn bench_time_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_step");
    let gas = FreestreamReference::air().with_velocity(50.0, -20.0, 0.0);
    let settings = SolverSettings::default();
    let n_modes = 4;

    for n_side in [10, 40, 100] {
        let geometry = ElementMetrics::uniform_quads(n_side, n_side, 1.0, 1.0, n_modes);
        let n = n_side * n_side * n_modes * n_modes;
        let state = PointFields::uniform(&gas.conserved_state(SpaceDim::TWO), n);
        let label = format!("{n_side}x{n_side}");

        group.bench_with_input(BenchmarkId::new("bounds", &label), &state, |b, state| {
            b.iter(|| std_velocity_bounds(&gas, SpaceDim::TWO, black_box(state), &geometry));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("bounds_parallel", &label),
            &state,
            |b, state| {
                b.iter(|| {
                    max_std_velocity_parallel(&gas, SpaceDim::TWO, black_box(state), &geometry)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("estimate", &label), &state, |b, state| {
            b.iter(|| {
                estimate_time_step(
                    &gas,
                    SpaceDim::TWO,
                    black_box(state),
                    &geometry,
                    &SerialCommunicator,
                    &settings,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_time_step);
criterion_main!(benches);
