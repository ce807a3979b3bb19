//! The drawing seam.
//!
//! The driver hands the particle slice to a [`Renderer`] once per frame and
//! never looks at how it gets drawn. The windowed backend is the wgpu
//! `GpuState`; tests plug in their own recorder.

use crate::error::RenderError;
use crate::particle::Particle;

/// A backend that can draw the particle scene.
pub trait Renderer {
    /// Resize the drawing surface, in physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Move the camera along its viewing axis.
    fn set_camera_distance(&mut self, distance: f32);

    /// Draw one frame.
    fn render(&mut self, particles: &[Particle]) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }

    fn set_camera_distance(&mut self, distance: f32) {
        (**self).set_camera_distance(distance);
    }

    fn render(&mut self, particles: &[Particle]) -> Result<(), RenderError> {
        (**self).render(particles)
    }
}
