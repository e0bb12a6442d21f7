//! Benchmarks for the per-iteration frame stages.
//!
//! Node counts cover the range a pseudospectral segment typically uses.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ndarray::Array2;

use flightframes_calc::{
    Conditions, Numerics, State, segment, update_forces, update_orientations,
};

const NODE_COUNTS: [usize; 4] = [8, 16, 64, 256];

/// Climbing, turning cruise with small attitude changes per node
fn generate_conditions(n: usize) -> Conditions {
    let mut c = Conditions::new(n);
    let dt = 600.0 / n as f64;
    for k in 0..n {
        let t = k as f64 * dt;
        let heading = 0.001 * t;
        c.frames.inertial.time[k] = t;
        c.frames.inertial.velocity_vector[[k, 0]] = 200.0 * heading.cos();
        c.frames.inertial.velocity_vector[[k, 1]] = 200.0 * heading.sin();
        c.frames.inertial.velocity_vector[[k, 2]] = -5.0;
        c.frames.body.inertial_rotations[[k, 0]] = 0.1;
        c.frames.body.inertial_rotations[[k, 1]] = 0.04;
        c.frames.body.inertial_rotations[[k, 2]] = heading;
        c.freestream.velocity[k] = 200.0;
        c.freestream.altitude[k] = 10_000.0 + 5.0 * t;
    }
    c.frames.wind.lift_force_vector = Array2::from_shape_fn((n, 3), |(_, j)| [0.0, 0.0, -7.0e5][j]);
    c.frames.wind.drag_force_vector = Array2::from_shape_fn((n, 3), |(_, j)| [-4.0e4, 0.0, 0.0][j]);
    c.frames.body.thrust_force_vector = Array2::from_shape_fn((n, 3), |(_, j)| [4.2e4, 0.0, 0.0][j]);
    c.frames.inertial.gravity_force_vector = Array2::from_shape_fn((n, 3), |(_, j)| [0.0, 0.0, 7.0e5][j]);
    c
}

/// Benchmark orientation and force stages
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stages");

    for &n in &NODE_COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        let conditions = generate_conditions(n);

        group.bench_with_input(BenchmarkId::new("update_orientations", n), &conditions, |b, c0| {
            let mut c = c0.clone();
            b.iter(|| update_orientations(&mut c));
        });

        let mut oriented = conditions.clone();
        update_orientations(&mut oriented);
        group.bench_with_input(BenchmarkId::new("update_forces", n), &oriented, |b, c0| {
            let mut c = c0.clone();
            b.iter(|| update_forces(&mut c));
        });
    }

    group.finish();
}

/// Benchmark a full solver pass
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segment");

    for &n in &NODE_COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        let conditions = generate_conditions(n);
        let numerics = Numerics::trapezoidal(conditions.frames.inertial.time.view());
        let state = match State::new(conditions, numerics, None) {
            Ok(state) => state,
            Err(err) => panic!("bench state: {err}"),
        };

        group.bench_with_input(BenchmarkId::new("iterate", n), &state, |b, s0| {
            let mut s = s0.clone();
            b.iter(|| segment::iterate(&mut s));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_iteration);

criterion_main!(benches);
