//! Physics constants, grouped so they can be overridden through
//! [`Backdrop::with_tuning`](crate::Backdrop::with_tuning).
//!
//! The defaults are the stock look; tweak with struct update
//! syntax:
//!
//! ```ignore
//! Backdrop::new().with_tuning(Tuning {
//!     collision: CollisionParams { strength: 0.03, ..Default::default() },
//!     ..Default::default()
//! })
//! ```

use glam::{Vec2, Vec3};

/// Periodic positional wobble applied before any force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobbleParams {
    /// Divided by the radius, so small spheres wobble more.
    pub amplitude: f32,
    /// Angular frequency per axis, applied to simulation time.
    pub frequency: Vec3,
    /// Extra scale on the depth axis.
    pub depth_scale: f32,
}

impl Default for WobbleParams {
    fn default() -> Self {
        Self {
            amplitude: 0.0015,
            frequency: Vec3::new(0.8, 0.7, 0.6),
            depth_scale: 0.7,
        }
    }
}

/// Pointer tracking and the pointer force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerParams {
    /// Fraction of the remaining gap the smoothed pointer closes per frame.
    pub smoothing: f32,
    /// World-space depth of the projected pointer.
    pub depth: f32,
    /// Force scale before the radius and axis factors.
    pub strength: f32,
    /// Displacement scale on x/y and on z.
    pub axis_scale: Vec3,
    /// Distances at or below this are ignored.
    pub min_distance: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            depth: 8.0,
            strength: 0.1,
            axis_scale: Vec3::new(0.2, 0.2, 0.15),
            min_distance: 0.1,
        }
    }
}

/// Pairwise overlap correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    /// Overlap tolerance: pairs closer than `(r1 + r2) * contact_scale` are pushed.
    pub contact_scale: f32,
    /// Fraction of the overlap corrected per frame.
    pub strength: f32,
    /// Extra scale on the depth correction.
    pub depth_scale: f32,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            contact_scale: 0.9,
            strength: 0.015,
            depth_scale: 0.8,
        }
    }
}

/// Wall response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    /// Fraction of the radius kept clear of the wall.
    pub margin_scale: f32,
    /// Velocity multiplier on impact; negative reflects.
    pub restitution: f32,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            margin_scale: 0.5,
            restitution: -0.7,
        }
    }
}

/// Every tunable of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Simulation time added per frame.
    pub frame_step: f32,
    pub wobble: WobbleParams,
    pub pointer: PointerParams,
    pub collision: CollisionParams,
    pub bounce: BounceParams,
    /// Visual rotation per frame around x and y.
    pub spin: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_step: 0.006,
            wobble: WobbleParams::default(),
            pointer: PointerParams::default(),
            collision: CollisionParams::default(),
            bounce: BounceParams::default(),
            spin: Vec2::new(0.002, 0.004),
        }
    }
}
