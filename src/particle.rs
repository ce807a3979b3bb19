//! The particle population.
//!
//! Spheres are created once, sized by the [`ViewportProfile`] in effect at
//! startup, and then only ever mutated in place. There is no spawning or
//! culling after initialization.

use crate::spawn::SpawnContext;
use crate::viewport::ViewportProfile;
use crate::Vec3;

/// Warm ember tones every sphere is colored from.
pub const EMBER_PALETTE: [u32; 6] = [0xff3300, 0xff5500, 0xff7700, 0xff9900, 0xffaa00, 0xffbb00];

/// Spawn positions cover this fraction of each half-extent.
pub const SPAWN_SPREAD: f32 = 0.75;

/// Per-axis velocity multipliers; depth drifts slower than the screen plane.
pub const VELOCITY_AXIS_FACTOR: Vec3 = Vec3::new(2.0, 2.0, 1.5);

/// Convert a `0xRRGGBB` sRGB color to linear RGB.
pub fn color_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Surface look of a sphere. Fixed at creation, read only by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub roughness: f32,
    pub emissive_intensity: f32,
    pub opacity: f32,
}

/// One simulated sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Never changes after creation.
    pub radius: f32,
    /// Desynchronizes the periodic wobble between spheres.
    pub phase: f32,
    /// Linear RGB.
    pub color: Vec3,
    /// Euler angles; purely visual.
    pub rotation: Vec3,
    pub material: Material,
}

impl Particle {
    /// Draw a fresh particle for the given profile.
    ///
    /// Smaller spheres get proportionally faster velocities.
    pub fn spawn(ctx: &mut SpawnContext, profile: &ViewportProfile) -> Self {
        let (min_radius, max_radius) = profile.size_range();
        let radius = ctx.random_range(min_radius, max_radius);

        let color = color_from_hex(*ctx.pick(&EMBER_PALETTE));
        let material = Material {
            roughness: ctx.random_range(0.1, 0.4),
            emissive_intensity: ctx.random_range(0.1, 0.4),
            opacity: ctx.random_range(0.7, 1.0),
        };

        let position = ctx.random_in_box(profile.bounds * SPAWN_SPREAD);

        let speed = profile.speed_base / radius;
        let velocity = Vec3::new(
            ctx.random_centered(speed),
            ctx.random_centered(speed),
            ctx.random_centered(speed),
        ) * VELOCITY_AXIS_FACTOR;

        Self {
            position,
            velocity,
            radius,
            phase: ctx.random_phase(),
            color,
            rotation: Vec3::ZERO,
            material,
        }
    }
}

/// Fixed-size owner of every particle.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Populate `profile.particle_count` particles.
    pub fn spawn(ctx: &mut SpawnContext, profile: &ViewportProfile) -> Self {
        let particles = (0..profile.particle_count)
            .map(|_| Particle::spawn(ctx, profile))
            .collect();
        Self { particles }
    }

    /// Wrap an existing population, e.g. a hand-placed test scene.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particles. The slice can't grow or shrink.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{Viewport, MIN_RADIUS};

    #[test]
    fn test_store_sized_by_profile() {
        let mut ctx = SpawnContext::seeded(1);
        let desktop = ViewportProfile::new(Viewport::new(1440, 900));
        assert_eq!(ParticleStore::spawn(&mut ctx, &desktop).len(), 80);

        let phone = ViewportProfile::new(Viewport::new(375, 667));
        assert_eq!(ParticleStore::spawn(&mut ctx, &phone).len(), 50);
    }

    #[test]
    fn test_spawned_attributes_in_range() {
        let mut ctx = SpawnContext::seeded(2);
        let profile = ViewportProfile::new(Viewport::new(1280, 720));
        let store = ParticleStore::spawn(&mut ctx, &profile);
        let spread = profile.bounds * SPAWN_SPREAD;

        for p in store.iter() {
            assert!(p.radius >= MIN_RADIUS && p.radius < MIN_RADIUS + profile.size_span);
            assert!(p.position.abs().cmple(spread).all());
            assert!((0.0..=std::f32::consts::TAU).contains(&p.phase));
            assert!((0.7..=1.0).contains(&p.material.opacity));

            // |v| per axis is bounded by half the scaled speed.
            let limit = VELOCITY_AXIS_FACTOR * (0.5 * profile.speed_base / p.radius);
            assert!(p.velocity.abs().cmple(limit + Vec3::splat(1e-7)).all());
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let mut ctx = SpawnContext::seeded(4);
        let profile = ViewportProfile::new(Viewport::new(1280, 720));
        let store = ParticleStore::spawn(&mut ctx, &profile);
        let palette: Vec<Vec3> = EMBER_PALETTE.iter().map(|c| color_from_hex(*c)).collect();

        for p in store.iter() {
            assert!(palette.contains(&p.color));
        }
    }

    #[test]
    fn test_color_from_hex() {
        let red = color_from_hex(0xff0000);
        assert!((red.x - 1.0).abs() < 1e-6);
        assert_eq!(red.y, 0.0);
        assert_eq!(red.z, 0.0);

        // Mid gray is darker in linear space.
        let gray = color_from_hex(0x808080);
        assert!(gray.x > 0.2 && gray.x < 0.25);
    }
}
