//! Per-frame particle motion.
//!
//! Each frame a particle goes through, in order: periodic wobble, the pointer
//! force, constant velocity drift, visual spin, and finally the wall clamp.
//! Every stage writes the position directly; there is no acceleration state
//! and velocity only changes when a wall is hit.

use glam::Vec3;

use crate::bounds::{clamp_to_bounds, WallHits};
use crate::particle::Particle;
use crate::tuning::{PointerParams, Tuning, WobbleParams};

/// Frame-wide inputs shared by every particle.
#[derive(Debug, Clone, Copy)]
pub struct MotionFrame {
    /// Simulation time (advances by a fixed step per frame).
    pub time: f64,
    /// World-space pointer position.
    pub pointer: Vec3,
    /// Pointer force reach.
    pub pointer_radius: f32,
    pub bounds: Vec3,
}

/// Phase-shifted sine/cosine wobble; smaller spheres wobble more.
///
/// Angles are formed in `f64` so the wave keeps its shape at large times.
pub fn wobble(particle: &mut Particle, time: f64, params: &WobbleParams) {
    let amount = params.amplitude / particle.radius;
    let phase = f64::from(particle.phase);
    let angle = |frequency: f32| f64::from(frequency) * time + phase;

    particle.position += Vec3::new(
        angle(params.frequency.x).sin() as f32,
        angle(params.frequency.y).cos() as f32,
        angle(params.frequency.z).sin() as f32 * params.depth_scale,
    ) * amount;
}

/// Pointer force with linear falloff to zero at `radius`.
///
/// The displacement is the pointer-to-particle offset scaled by the force,
/// so it is applied along that offset. Particles closer than
/// `min_distance` or at/after `radius` are left alone. Returns whether the
/// force was applied.
pub fn pointer_force(particle: &mut Particle, pointer: Vec3, radius: f32, params: &PointerParams) -> bool {
    let offset = particle.position - pointer;
    let dist = offset.length();

    if dist >= radius || dist <= params.min_distance {
        return false;
    }

    let force = (1.0 - dist / radius) * params.strength / particle.radius;
    particle.position += offset * force * params.axis_scale;
    true
}

/// Constant velocity drift.
#[inline]
pub fn drift(particle: &mut Particle) {
    particle.position += particle.velocity;
}

/// Visual rotation only; has no influence on the simulation.
#[inline]
pub fn spin(particle: &mut Particle, step: glam::Vec2) {
    particle.rotation.x += step.x;
    particle.rotation.y += step.y;
}

/// Run the full per-particle pipeline for one frame.
pub fn integrate(particle: &mut Particle, frame: &MotionFrame, tuning: &Tuning) -> WallHits {
    wobble(particle, frame.time, &tuning.wobble);
    pointer_force(particle, frame.pointer, frame.pointer_radius, &tuning.pointer);
    drift(particle);
    spin(particle, tuning.spin);
    clamp_to_bounds(particle, frame.bounds, &tuning.bounce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Material;

    fn particle_at(position: Vec3, radius: f32) -> Particle {
        Particle {
            position,
            velocity: Vec3::ZERO,
            radius,
            phase: 0.0,
            color: Vec3::ONE,
            rotation: Vec3::ZERO,
            material: Material {
                roughness: 0.2,
                emissive_intensity: 0.2,
                opacity: 1.0,
            },
        }
    }

    #[test]
    fn test_wobble_at_time_zero() {
        let mut p = particle_at(Vec3::ZERO, 0.5);
        wobble(&mut p, 0.0, &WobbleParams::default());

        // sin(0) = 0, cos(0) = 1: only y moves, by amplitude / radius.
        assert_eq!(p.position.x, 0.0);
        assert!((p.position.y - 0.003).abs() < 1e-7);
        assert_eq!(p.position.z, 0.0);
    }

    #[test]
    fn test_wobble_scales_inversely_with_radius() {
        let params = WobbleParams::default();
        let mut small = particle_at(Vec3::ZERO, 0.5);
        let mut large = particle_at(Vec3::ZERO, 2.0);
        wobble(&mut small, 1.3, &params);
        wobble(&mut large, 1.3, &params);

        assert!((small.position - large.position * 4.0).length() < 1e-7);
    }

    #[test]
    fn test_wobble_keeps_moving_late_in_a_run() {
        let params = WobbleParams::default();
        // A day of frames at the stock step.
        let late = 86_400.0 * 60.0 * f64::from(0.006f32);
        let step = f64::from(0.006f32);

        let mut a = particle_at(Vec3::ZERO, 1.0);
        let mut b = particle_at(Vec3::ZERO, 1.0);
        wobble(&mut a, late, &params);
        wobble(&mut b, late + step, &params);

        let expected = (f64::from(params.frequency.x) * (late + step)).sin() - (f64::from(params.frequency.x) * late).sin();
        let moved = f64::from(b.position.x - a.position.x) / f64::from(params.amplitude);
        assert!((moved - expected).abs() < 1e-5, "{} vs {}", moved, expected);
    }

    #[test]
    fn test_pointer_force_displacement() {
        let params = PointerParams::default();
        let pointer = Vec3::new(0.0, 0.0, 8.0);
        let mut p = particle_at(Vec3::new(5.0, 0.0, 8.0), 1.0);

        assert!(pointer_force(&mut p, pointer, 20.0, &params));

        // f = (1 - 5/20) * 0.1 / 1 = 0.075; dx = 5 * 0.075 * 0.2
        assert!((p.position.x - (5.0 + 0.075)).abs() < 1e-6);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.position.z, 8.0);
    }

    #[test]
    fn test_pointer_force_out_of_range() {
        let params = PointerParams::default();
        let pointer = Vec3::ZERO;

        let mut far = particle_at(Vec3::new(25.0, 0.0, 0.0), 1.0);
        assert!(!pointer_force(&mut far, pointer, 20.0, &params));
        assert_eq!(far.position.x, 25.0);

        let mut on_top = particle_at(Vec3::new(0.05, 0.0, 0.0), 1.0);
        assert!(!pointer_force(&mut on_top, pointer, 20.0, &params));
        assert_eq!(on_top.position.x, 0.05);
    }

    #[test]
    fn test_drift_and_spin() {
        let mut p = particle_at(Vec3::ZERO, 1.0);
        p.velocity = Vec3::new(0.01, -0.02, 0.005);

        drift(&mut p);
        spin(&mut p, glam::Vec2::new(0.002, 0.004));

        assert_eq!(p.position, Vec3::new(0.01, -0.02, 0.005));
        assert_eq!(p.rotation, Vec3::new(0.002, 0.004, 0.0));
        assert_eq!(p.velocity, Vec3::new(0.01, -0.02, 0.005));
    }

    #[test]
    fn test_integrate_ends_inside_bounds() {
        let tuning = Tuning::default();
        let frame = MotionFrame {
            time: 0.0,
            pointer: Vec3::new(9.0, 0.0, 8.0),
            pointer_radius: 20.0,
            bounds: Vec3::new(10.0, 8.0, 15.0),
        };
        let mut p = particle_at(Vec3::new(9.4, 0.0, 8.0), 1.0);
        p.velocity = Vec3::new(0.2, 0.0, 0.0);

        let hits = integrate(&mut p, &frame, &tuning);

        assert!(hits.x);
        assert_eq!(p.position.x, 9.5);
        assert!(p.velocity.x < 0.0);
    }
}
