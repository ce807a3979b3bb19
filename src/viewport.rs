//! Viewport-driven sizing.
//!
//! Everything that scales with the window - the simulation box, how many
//! spheres exist, how large and fast they are, how far the pointer reaches -
//! is derived here from the window's width and height through a handful of
//! width breakpoints.
//!
//! ```ignore
//! let profile = ViewportProfile::new(Viewport::new(1024, 768));
//! assert_eq!(profile.particle_count, 80);
//! assert_eq!(profile.bounds, Vec3::new(18.0, 12.0, 15.0));
//! ```

use glam::Vec3;

/// Widths at or below this are treated as phones/tablets.
pub const COMPACT_MAX_WIDTH: u32 = 768;

/// Depth half-extent of the simulation box, independent of the window.
pub const DEPTH_EXTENT: f32 = 15.0;

/// Smallest particle radius ever spawned.
pub const MIN_RADIUS: f32 = 0.3;

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero height counts as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Phone or tablet sized window.
    pub fn is_compact(&self) -> bool {
        self.width <= COMPACT_MAX_WIDTH
    }
}

/// Device pixel ratio cap for the drawing surface.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// A window's logical size plus its scale factor.
///
/// Breakpoints work on logical pixels; only the drawing surface cares about
/// physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub logical: Viewport,
    pub scale_factor: f64,
}

impl WindowSize {
    pub fn new(logical: Viewport, scale_factor: f64) -> Self {
        Self {
            logical,
            scale_factor,
        }
    }

    pub fn from_physical(size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical: winit::dpi::LogicalSize<u32> = size.to_logical(scale_factor);
        Self::new(Viewport::new(logical.width, logical.height), scale_factor)
    }

    /// A minimized window reports a zero-sized area.
    pub fn is_empty(&self) -> bool {
        self.logical.width == 0 || self.logical.height == 0
    }

    /// Surface size in pixels, with the pixel ratio capped at [`MAX_PIXEL_RATIO`].
    pub fn surface(&self) -> (u32, u32) {
        let ratio = self.scale_factor.clamp(f64::MIN_POSITIVE, MAX_PIXEL_RATIO);
        let scale = |v: u32| ((v as f64 * ratio).round() as u32).max(1);
        (scale(self.logical.width), scale(self.logical.height))
    }
}

/// Width class used to pick the base box extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Up to 480px.
    Phone,
    /// Up to 768px.
    Tablet,
    /// Up to 1024px.
    Laptop,
    /// Anything wider.
    Desktop,
}

impl Breakpoint {
    pub fn for_width(width: u32) -> Self {
        match width {
            0..=480 => Breakpoint::Phone,
            481..=768 => Breakpoint::Tablet,
            769..=1024 => Breakpoint::Laptop,
            _ => Breakpoint::Desktop,
        }
    }

    /// Base `(x, y)` half-extents before aspect corrections.
    pub fn base_extent(self) -> (f32, f32) {
        match self {
            Breakpoint::Phone => (10.0, 8.0),
            Breakpoint::Tablet => (14.0, 10.0),
            Breakpoint::Laptop => (18.0, 12.0),
            Breakpoint::Desktop => (22.0, 14.0),
        }
    }
}

/// Compute the simulation half-extents for a window.
///
/// Ultra-wide windows (aspect > 2) stretch `x` by 20%; tall windows
/// (aspect < 0.8) shrink both axes by 30%. Compact widths shrink both axes
/// a further 15%. Depth is always [`DEPTH_EXTENT`].
pub fn screen_bounds(viewport: Viewport) -> Vec3 {
    let (mut x, mut y) = Breakpoint::for_width(viewport.width).base_extent();

    let aspect = viewport.aspect();
    if aspect > 2.0 {
        x *= 1.2;
    } else if aspect < 0.8 {
        x *= 0.7;
        y *= 0.7;
    }

    if viewport.is_compact() {
        x *= 0.85;
        y *= 0.85;
    }

    Vec3::new(x, y, DEPTH_EXTENT)
}

/// All window-dependent parameters of the backdrop.
///
/// `particle_count`, `size_span` and `speed_base` are only read when the
/// particles are created. The rest is refreshed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportProfile {
    pub viewport: Viewport,
    /// Half-extents of the simulation box.
    pub bounds: Vec3,
    pub particle_count: usize,
    /// Radii are drawn from `MIN_RADIUS..MIN_RADIUS + size_span`.
    pub size_span: f32,
    pub speed_base: f32,
    /// Pointer force reach in world units.
    pub pointer_radius: f32,
    pub camera_distance: f32,
    /// Pairwise collisions are too costly for small devices.
    pub collisions: bool,
}

impl ViewportProfile {
    pub fn new(viewport: Viewport) -> Self {
        let compact = viewport.is_compact();

        Self {
            viewport,
            bounds: screen_bounds(viewport),
            particle_count: if compact { 50 } else { 80 },
            size_span: if compact { 1.8 } else { 2.2 },
            speed_base: if compact { 0.0015 } else { 0.002 },
            pointer_radius: if compact { 15.0 } else { 20.0 },
            camera_distance: if compact { 28.0 } else { 35.0 },
            collisions: !compact,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    /// Radius range used when spawning.
    pub fn size_range(&self) -> (f32, f32) {
        (MIN_RADIUS, MIN_RADIUS + self.size_span)
    }
}
