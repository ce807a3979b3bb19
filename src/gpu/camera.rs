//! Fixed perspective camera for the backdrop.

use glam::{Mat4, Vec3};

/// Camera placed on the +Z axis, slightly raised, looking down -Z.
///
/// Only the distance changes at runtime (closer on compact viewports).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Distance along +Z.
    pub distance: f32,
    /// Height above the box center.
    pub height: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera with default positioning.
    pub fn new() -> Self {
        Self {
            fov_y_degrees: 60.0,
            distance: 35.0,
            height: 2.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.height, self.distance)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
