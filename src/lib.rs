//! # Emberfield
//!
//! An animated backdrop of glowing, ember-colored spheres drifting inside a
//! box sized to the window.
//!
//! Spheres wobble, drift, bounce off the box walls, get pushed around by the
//! pointer and, on larger screens, shove each other apart when they overlap.
//! Everything that depends on the window (box size, sphere count, sizes,
//! speeds, pointer reach, camera distance) is derived from its width and
//! height.
//!
//! ## Quick Start
//!
//! ```ignore
//! use emberfield::prelude::*;
//!
//! fn main() -> Result<(), BackdropError> {
//!     Backdrop::new()
//!         .with_title("Embers")
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Simulation
//!
//! [`Simulation`] owns the whole state: the [`ViewportProfile`] in effect,
//! the particles, the smoothed pointer and the clock. Each
//! [`step`](Simulation::step) runs, in order:
//!
//! 1. pointer smoothing
//! 2. per particle: wobble, pointer push, drift, spin, wall clamp
//! 3. pairwise collision separation (non-compact viewports only)
//!
//! ### Driver
//!
//! [`RenderDriver`] ties a simulation to a [`Renderer`] and a
//! [`FrameScheduler`]. It steps and draws once per delivered frame,
//! debounces resizes and pauses while the window is hidden. Tests drive it
//! with a [`ManualStepper`] and their own renderer instead of a real window.
//!
//! ### Tuning
//!
//! Every physics constant lives in [`Tuning`]; its `Default` is the stock
//! look.
//!
//! ```ignore
//! let mut tuning = Tuning::default();
//! tuning.pointer.strength = 0.2;
//! Backdrop::new().with_tuning(tuning).run()?;
//! ```

pub mod bounds;
pub mod collision;
pub mod driver;
pub mod error;
mod gpu;
pub mod input;
pub mod motion;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod schedule;
pub mod simulation;
pub mod spawn;
pub mod time;
pub mod tuning;
pub mod viewport;
pub mod widgets;
mod window;

pub use driver::RenderDriver;
pub use error::{BackdropError, GpuError, RenderError};
pub use glam::{Vec2, Vec3};
pub use gpu::{Camera, GpuState, PointLight, SphereInstance, LIGHTS, SPHERE_SHADER};
pub use particle::{Material, Particle, ParticleStore};
pub use render::Renderer;
pub use schedule::{Debouncer, FrameScheduler, ManualStepper};
pub use simulation::{FrameStats, Simulation};
pub use spawn::SpawnContext;
pub use tuning::Tuning;
pub use viewport::{Viewport, ViewportProfile, WindowSize};
pub use window::Backdrop;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use emberfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::driver::RenderDriver;
    pub use crate::error::{BackdropError, RenderError};
    pub use crate::particle::{Particle, ParticleStore};
    pub use crate::render::Renderer;
    pub use crate::schedule::{FrameScheduler, ManualStepper};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SpawnContext;
    pub use crate::tuning::Tuning;
    pub use crate::viewport::{Viewport, ViewportProfile};
    pub use crate::window::Backdrop;
    pub use crate::{Vec2, Vec3};
}
