//! Benchmarks for the CPU-side frame work.
//!
//! Run with: `cargo bench`

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use emberfield::collision::resolve_collisions;
use emberfield::prelude::*;
use emberfield::tuning::CollisionParams;

fn population(width: u32, height: u32) -> (ViewportProfile, ParticleStore) {
    let profile = ViewportProfile::new(Viewport::new(width, height));
    let particles = ParticleStore::spawn(&mut SpawnContext::seeded(42), &profile);
    (profile, particles)
}

fn bench_resolve_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");
    let params = CollisionParams::default();

    for count in [80usize, 200, 500] {
        let mut profile = ViewportProfile::new(Viewport::new(1920, 1080));
        profile.particle_count = count;
        let particles = ParticleStore::spawn(&mut SpawnContext::seeded(42), &profile);

        group.bench_with_input(BenchmarkId::from_parameter(count), &particles, |b, particles| {
            b.iter_batched(
                || particles.as_slice().to_vec(),
                |mut scene| black_box(resolve_collisions(&mut scene, &params)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for (name, width, height) in [("desktop", 1920, 1080), ("phone", 390, 844)] {
        let (profile, particles) = population(width, height);
        let mut simulation = Simulation::with_particles(profile, particles, Tuning::default());
        simulation.pointer_moved(Vec2::new(width as f32 * 0.5, height as f32 * 0.5));
        let now = Instant::now();

        group.bench_function(name, |b| b.iter(|| black_box(simulation.step(now))));
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_collisions, bench_step);
criterion_main!(benches);
