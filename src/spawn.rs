//! Spawn context for particle initialization.
//!
//! Wraps a small seeded RNG with the handful of random helpers the particle
//! store needs, so spawning reads as intent rather than RNG plumbing:
//!
//! ```ignore
//! let mut ctx = SpawnContext::seeded(7);
//! let radius = ctx.random_range(0.3, 2.5);
//! let position = ctx.random_in_box(bounds * 0.75);
//! let phase = ctx.random_phase();
//! ```

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Random source used while populating the particle store.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Deterministic context; the same seed always yields the same population.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Context seeded from the clock, different on every run.
    pub fn from_clock() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `min..max`. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random value centered on zero: `(random - 0.5) * scale`.
    #[inline]
    pub fn random_centered(&mut self, scale: f32) -> f32 {
        (self.random() - 0.5) * scale
    }

    /// Random point inside an axis-aligned box of the given half-extents.
    pub fn random_in_box(&mut self, half_extents: Vec3) -> Vec3 {
        Vec3::new(
            self.random_centered(half_extents.x * 2.0),
            self.random_centered(half_extents.y * 2.0),
            self.random_centered(half_extents.z * 2.0),
        )
    }

    /// Random angle in `[0, 2π)`.
    pub fn random_phase(&mut self) -> f32 {
        self.random() * TAU
    }

    /// Uniformly pick one entry. Panics on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }
}
