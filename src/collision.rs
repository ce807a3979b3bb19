//! Soft pairwise collision response.
//!
//! Overlapping spheres are nudged apart by a fraction of their overlap each
//! frame. This is a positional correction only: velocities are untouched and
//! there is no momentum exchange. Every unordered pair is tested, so the cost
//! is quadratic in the particle count.

use glam::Vec3;

use crate::particle::Particle;
use crate::tuning::CollisionParams;

/// Push-apart offset for particle `a` against `b`, or `None` when they don't
/// overlap (or coincide exactly). `b` moves by the negated offset.
///
/// The x/y push follows the azimuth of `a - b`; the z push follows its
/// elevation and is scaled by `depth_scale`.
pub fn separation(a: &Particle, b: &Particle, params: &CollisionParams) -> Option<Vec3> {
    let d = a.position - b.position;
    let dist = d.length();
    let min_dist = (a.radius + b.radius) * params.contact_scale;

    if dist >= min_dist || dist <= 0.0 {
        return None;
    }

    let azimuth = d.y.atan2(d.x);
    let elevation = d.z.atan2(d.x.hypot(d.y));
    let force = (min_dist - dist) * params.strength;

    Some(Vec3::new(
        azimuth.cos() * force,
        azimuth.sin() * force,
        elevation.sin() * force * params.depth_scale,
    ))
}

/// Resolve every overlapping pair once, in index order.
///
/// Later pairs see the corrections applied by earlier ones. Returns the
/// number of pairs that were pushed apart.
pub fn resolve_collisions(particles: &mut [Particle], params: &CollisionParams) -> usize {
    let mut contacts = 0;

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            if let Some(push) = separation(a, b, params) {
                a.position += push;
                b.position -= push;
                contacts += 1;
            }
        }
    }

    contacts
}
