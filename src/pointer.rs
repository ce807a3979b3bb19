//! Smoothed pointer tracking.
//!
//! The tracker keeps two views of the pointer:
//!
//! - a normalized screen target in `-1..1` (y up) with a low-pass filtered
//!   `current` that trails it, for screen-space effects;
//! - a world-space point on the plane `z = depth`, scaled to the simulation
//!   box, which drives the pointer force on the particles.
//!
//! Lifting a finger recenters the screen target but deliberately leaves the
//! world point where the finger was, so the force lingers there.

use glam::{Vec2, Vec3};

use crate::tuning::PointerParams;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    target: Vec2,
    current: Vec2,
    world: Vec3,
    touching: bool,
    smoothing: f32,
    depth: f32,
}

impl PointerTracker {
    pub fn new(params: &PointerParams) -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            world: Vec3::new(0.0, 0.0, params.depth),
            touching: false,
            smoothing: params.smoothing,
            depth: params.depth,
        }
    }

    /// Normalized target the smoothed pointer is heading to.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Smoothed pointer position.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Pointer projected into the simulation box.
    pub fn world(&self) -> Vec3 {
        self.world
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Pointer (mouse or first touch) moved to `position` in window pixels.
    pub fn move_to(&mut self, position: Vec2, viewport: Viewport, bounds: Vec3) {
        let size = Vec2::new(viewport.width.max(1) as f32, viewport.height.max(1) as f32);
        let uv = position / size;

        self.target = Vec2::new(uv.x * 2.0 - 1.0, -uv.y * 2.0 + 1.0);
        self.world = Vec3::new(
            (uv.x - 0.5) * bounds.x * 2.0,
            -(uv.y - 0.5) * bounds.y * 2.0,
            self.depth,
        );
    }

    pub fn touch_start(&mut self, position: Vec2, viewport: Viewport, bounds: Vec3) {
        self.touching = true;
        self.move_to(position, viewport, bounds);
    }

    /// Finger lifted or cancelled. The world point stays put.
    pub fn touch_end(&mut self) {
        self.touching = false;
        self.target = Vec2::ZERO;
    }

    /// Advance the low-pass filter one frame.
    pub fn smooth(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(&PointerParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 800,
        height: 600,
    };
    const BOUNDS: Vec3 = Vec3::new(18.0, 12.0, 15.0);

    #[test]
    fn test_center_maps_to_origin() {
        let mut pointer = PointerTracker::default();
        pointer.move_to(Vec2::new(400.0, 300.0), VIEW, BOUNDS);

        assert!(pointer.target().length() < 1e-6);
        assert_eq!(pointer.world(), Vec3::new(0.0, 0.0, 8.0));
    }

    #[test]
    fn test_corner_mapping() {
        let mut pointer = PointerTracker::default();
        pointer.move_to(Vec2::new(0.0, 0.0), VIEW, BOUNDS);

        assert_eq!(pointer.target(), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer.world(), Vec3::new(-18.0, 12.0, 8.0));
    }

    #[test]
    fn test_touch_end_keeps_world_point() {
        let mut pointer = PointerTracker::default();
        pointer.touch_start(Vec2::new(800.0, 600.0), VIEW, BOUNDS);
        assert!(pointer.is_touching());

        pointer.touch_end();

        assert!(!pointer.is_touching());
        assert_eq!(pointer.target(), Vec2::ZERO);
        assert_eq!(pointer.world(), Vec3::new(18.0, -12.0, 8.0));
    }

    #[test]
    fn test_smoothing_converges_monotonically() {
        let mut pointer = PointerTracker::default();
        pointer.move_to(Vec2::new(800.0, 0.0), VIEW, BOUNDS);
        let target = pointer.target();

        let mut last_gap = (target - pointer.current()).length();
        for _ in 0..44 {
            pointer.smooth();
            let gap = (target - pointer.current()).length();
            assert!(gap < last_gap);
            last_gap = gap;
        }

        // 0.9^44 < 0.01
        assert!(last_gap < 0.01 * target.length());
    }
}
