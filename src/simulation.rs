//! The simulation context.
//!
//! [`Simulation`] owns every piece of mutable state - the particles, the
//! pointer, the clock and the current viewport profile - and advances it one
//! frame at a time. It knows nothing about windows or GPUs.

use std::time::Instant;

use glam::Vec2;

use crate::collision::resolve_collisions;
use crate::motion::{integrate, MotionFrame};
use crate::particle::{Particle, ParticleStore};
use crate::pointer::PointerTracker;
use crate::spawn::SpawnContext;
use crate::time::Time;
use crate::tuning::Tuning;
use crate::viewport::{Viewport, ViewportProfile};

/// What happened during one [`Simulation::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Whether the simulation advanced (false while paused).
    pub advanced: bool,
    /// Particles that hit at least one wall.
    pub wall_hits: usize,
    /// Overlapping pairs pushed apart.
    pub contacts: usize,
}

pub struct Simulation {
    profile: ViewportProfile,
    particles: ParticleStore,
    pointer: PointerTracker,
    time: Time,
    tuning: Tuning,
}

impl Simulation {
    /// Spawn a population sized for `viewport`.
    pub fn new(viewport: Viewport, tuning: Tuning, spawn: &mut SpawnContext) -> Self {
        let profile = ViewportProfile::new(viewport);
        let particles = ParticleStore::spawn(spawn, &profile);
        Self::with_particles(profile, particles, tuning)
    }

    /// Build around an existing population.
    pub fn with_particles(profile: ViewportProfile, particles: ParticleStore, tuning: Tuning) -> Self {
        Self {
            profile,
            particles,
            pointer: PointerTracker::new(&tuning.pointer),
            time: Time::new(tuning.frame_step),
            tuning,
        }
    }

    pub fn profile(&self) -> &ViewportProfile {
        &self.profile
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advance one frame.
    ///
    /// Order: clock, pointer smoothing, motion + wall clamp for each
    /// particle, then collisions across all pairs (wide viewports only).
    pub fn step(&mut self, now: Instant) -> FrameStats {
        if !self.time.tick(now) {
            return FrameStats::default();
        }

        self.pointer.smooth();

        let frame = MotionFrame {
            time: self.time.elapsed(),
            pointer: self.pointer.world(),
            pointer_radius: self.profile.pointer_radius,
            bounds: self.profile.bounds,
        };

        let mut stats = FrameStats {
            advanced: true,
            ..Default::default()
        };

        for particle in self.particles.as_mut_slice() {
            if integrate(particle, &frame, &self.tuning).any() {
                stats.wall_hits += 1;
            }
        }

        if self.profile.collisions {
            stats.contacts = resolve_collisions(self.particles.as_mut_slice(), &self.tuning.collision);
        }

        stats
    }

    /// Adopt a new viewport.
    ///
    /// Bounds, pointer reach, collision switch and camera distance follow the
    /// new size. The population is left as is: particles outside the new box
    /// are pulled back by the next frame's wall clamp.
    pub fn resize(&mut self, viewport: Viewport) -> &ViewportProfile {
        self.profile = ViewportProfile::new(viewport);
        &self.profile
    }

    /// Pointer moved, in window pixels.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.move_to(position, self.profile.viewport, self.profile.bounds);
    }

    pub fn touch_started(&mut self, position: Vec2) {
        self.pointer.touch_start(position, self.profile.viewport, self.profile.bounds);
    }

    pub fn touch_ended(&mut self) {
        self.pointer.touch_end();
    }

    pub fn pause(&mut self) {
        self.time.pause();
    }

    pub fn resume(&mut self) {
        self.time.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.time.is_paused()
    }
}
