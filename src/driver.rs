//! The frame loop.
//!
//! [`RenderDriver`] ties a [`Simulation`] to a [`Renderer`] and a
//! [`FrameScheduler`]: each delivered frame steps the simulation, draws it
//! once and asks for the next frame. Resizes are debounced so a window drag
//! only reprofiles once it settles.
//!
//! The driver has an explicit lifecycle: nothing is scheduled before
//! [`start`](RenderDriver::start), and after [`stop`](RenderDriver::stop)
//! delivered frames are ignored and no new ones are requested.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::RenderError;
use crate::render::Renderer;
use crate::schedule::{Debouncer, FrameScheduler};
use crate::simulation::{FrameStats, Simulation};
use crate::viewport::{ViewportProfile, WindowSize};

/// Quiet period before a resize takes effect.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

pub struct RenderDriver<R: Renderer, S: FrameScheduler> {
    simulation: Simulation,
    renderer: R,
    scheduler: S,
    resize: Debouncer<WindowSize>,
    running: bool,
    visible: bool,
}

impl<R: Renderer, S: FrameScheduler> RenderDriver<R, S> {
    pub fn new(simulation: Simulation, renderer: R, scheduler: S) -> Self {
        Self {
            simulation,
            renderer,
            scheduler,
            resize: Debouncer::new(RESIZE_DEBOUNCE),
            running: false,
            visible: true,
        }
    }

    /// Point the camera for the current profile and request the first frame.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;

        let profile = *self.simulation.profile();
        self.renderer.set_camera_distance(profile.camera_distance);
        info!(
            "Starting backdrop: {} particles, bounds {:.2}x{:.2}x{:.2}, collisions {}",
            self.simulation.particles().len(),
            profile.bounds.x,
            profile.bounds.y,
            profile.bounds.z,
            if profile.collisions { "on" } else { "off" },
        );

        if self.visible {
            self.scheduler.request_frame();
        }
    }

    /// Stop scheduling frames and drop any pending resize.
    pub fn stop(&mut self) {
        if self.running {
            info!("Stopping backdrop after {} frames", self.simulation.time().frame());
        }
        self.running = false;
        self.resize.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One frame callback: step, draw, request the next frame.
    ///
    /// Non-fatal render errors are logged and the frame is dropped; a fatal
    /// one stops the driver and is returned.
    pub fn frame(&mut self, now: Instant) -> Result<FrameStats, RenderError> {
        if !self.running || !self.visible {
            return Ok(FrameStats::default());
        }

        let stats = self.simulation.step(now);

        match self.renderer.render(self.simulation.particles()) {
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                self.stop();
                return Err(e);
            }
            Err(e) => warn!("{}", e),
        }

        let frame = self.simulation.time().frame();
        if frame % FPS_LOG_INTERVAL == 0 {
            debug!("frame {}: {:.1} fps, {} contacts", frame, self.simulation.time().fps(), stats.contacts);
        }

        self.scheduler.request_frame();
        Ok(stats)
    }

    /// Note a window resize; it applies once no other resize arrives for
    /// [`RESIZE_DEBOUNCE`].
    ///
    /// Zero-sized areas (a minimized window) are ignored; the current profile
    /// stays in effect until a real size arrives.
    pub fn request_resize(&mut self, size: WindowSize, now: Instant) {
        if !self.running {
            return;
        }
        if size.is_empty() {
            debug!("Ignoring empty resize {}x{}", size.logical.width, size.logical.height);
            return;
        }
        self.resize.trigger(size, now);
    }

    /// When the pending resize is due, if any.
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Apply the pending resize if it is due.
    ///
    /// Reprofiles the simulation, resizes the surface and moves the camera.
    /// Existing particles are not rescaled.
    pub fn poll_resize(&mut self, now: Instant) -> Option<ViewportProfile> {
        let size = self.resize.poll(now)?;

        let profile = *self.simulation.resize(size.logical);
        let (width, height) = size.surface();
        self.renderer.resize(width, height);
        self.renderer.set_camera_distance(profile.camera_distance);

        info!(
            "Resized to {}x{} (surface {}x{}): bounds {:.2}x{:.2}, camera {}",
            size.logical.width, size.logical.height, width, height, profile.bounds.x, profile.bounds.y, profile.camera_distance
        );
        Some(profile)
    }

    /// Hidden windows don't animate. Becoming visible resumes the loop.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            debug!("Window visible, resuming");
            self.simulation.resume();
            if self.running {
                self.scheduler.request_frame();
            }
        } else {
            debug!("Window hidden, pausing");
            self.simulation.pause();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Input handlers feed the pointer through here.
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::schedule::ManualStepper;
    use crate::spawn::SpawnContext;
    use crate::tuning::Tuning;
    use crate::viewport::Viewport;

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        sizes: Vec<(u32, u32)>,
        camera: Option<f32>,
        fail_with: Option<RenderError>,
    }

    impl Renderer for Recorder {
        fn resize(&mut self, width: u32, height: u32) {
            self.sizes.push((width, height));
        }

        fn set_camera_distance(&mut self, distance: f32) {
            self.camera = Some(distance);
        }

        fn render(&mut self, _particles: &[Particle]) -> Result<(), RenderError> {
            match self.fail_with.take() {
                Some(e) => Err(e),
                None => {
                    self.frames += 1;
                    Ok(())
                }
            }
        }
    }

    fn driver(width: u32, height: u32) -> RenderDriver<Recorder, ManualStepper> {
        let sim = Simulation::new(Viewport::new(width, height), Tuning::default(), &mut SpawnContext::seeded(1));
        RenderDriver::new(sim, Recorder::default(), ManualStepper::new())
    }

    #[test]
    fn test_nothing_scheduled_before_start() {
        let mut driver = driver(1280, 720);
        assert!(!driver.scheduler().is_pending());

        driver.frame(Instant::now()).unwrap();
        assert_eq!(driver.renderer().frames, 0);

        driver.start();
        assert!(driver.scheduler().is_pending());
        assert_eq!(driver.renderer().camera, Some(35.0));
    }

    #[test]
    fn test_each_frame_draws_once_and_reschedules() {
        let mut driver = driver(1280, 720);
        driver.start();
        let now = Instant::now();

        for _ in 0..10 {
            assert!(driver.scheduler_mut().take());
            driver.frame(now).unwrap();
        }

        assert_eq!(driver.renderer().frames, 10);
        assert_eq!(driver.simulation().time().frame(), 10);
        assert!(driver.scheduler().is_pending());
    }

    #[test]
    fn test_stop_halts_scheduling() {
        let mut driver = driver(1280, 720);
        driver.start();
        driver.scheduler_mut().take();

        driver.stop();
        driver.frame(Instant::now()).unwrap();

        assert!(!driver.scheduler().is_pending());
        assert_eq!(driver.renderer().frames, 0);
    }

    #[test]
    fn test_fatal_render_error_stops() {
        let mut driver = driver(1280, 720);
        driver.start();
        driver.renderer_mut().fail_with = Some(RenderError::OutOfMemory);
        driver.scheduler_mut().take();

        assert_eq!(driver.frame(Instant::now()), Err(RenderError::OutOfMemory));
        assert!(!driver.is_running());
        assert!(!driver.scheduler().is_pending());
    }

    #[test]
    fn test_lost_surface_skips_frame_and_continues() {
        let mut driver = driver(1280, 720);
        driver.start();
        driver.renderer_mut().fail_with = Some(RenderError::SurfaceLost);
        driver.scheduler_mut().take();

        assert!(driver.frame(Instant::now()).is_ok());
        assert!(driver.scheduler().is_pending());
    }

    #[test]
    fn test_rapid_resizes_apply_last_only() {
        let mut driver = driver(1280, 720);
        driver.start();
        let start = Instant::now();

        for (i, width) in [1100u32, 900, 700, 500].into_iter().enumerate() {
            let at = start + Duration::from_millis(30 * i as u64);
            driver.request_resize(WindowSize::new(Viewport::new(width, 800), 1.0), at);
            assert_eq!(driver.poll_resize(at), None);
        }

        let settled = start + Duration::from_millis(90) + RESIZE_DEBOUNCE;
        let profile = driver.poll_resize(settled).expect("resize due");

        assert_eq!(profile.viewport, Viewport::new(500, 800));
        assert_eq!(driver.renderer().sizes, vec![(500, 800)]);
        assert_eq!(driver.renderer().camera, Some(28.0));
        assert_eq!(driver.poll_resize(settled + RESIZE_DEBOUNCE), None);
    }

    #[test]
    fn test_minimized_window_keeps_profile() {
        let mut driver = driver(1280, 720);
        driver.start();
        let before = *driver.simulation().profile();
        let now = Instant::now();

        driver.request_resize(WindowSize::new(Viewport::new(0, 0), 2.0), now);
        assert_eq!(driver.resize_deadline(), None);
        assert_eq!(driver.poll_resize(now + RESIZE_DEBOUNCE), None);
        assert_eq!(*driver.simulation().profile(), before);
        assert!(driver.renderer().sizes.is_empty());

        // Restoring to the same size reprofiles to the same box.
        let later = now + RESIZE_DEBOUNCE * 2;
        driver.request_resize(WindowSize::new(Viewport::new(1280, 720), 2.0), later);
        let profile = driver.poll_resize(later + RESIZE_DEBOUNCE).expect("resize due");
        assert_eq!(profile.bounds, before.bounds);
        assert!(profile.collisions);
        assert_eq!(driver.renderer().sizes, vec![(2560, 1440)]);
    }

    #[test]
    fn test_compact_start_uses_near_camera() {
        let mut driver = driver(390, 844);
        driver.start();
        assert_eq!(driver.renderer().camera, Some(28.0));
    }

    #[test]
    fn test_hidden_window_pauses() {
        let mut driver = driver(1280, 720);
        driver.start();
        driver.scheduler_mut().take();

        driver.set_visible(false);
        let stats = driver.frame(Instant::now()).unwrap();
        assert!(!stats.advanced);
        assert!(!driver.scheduler().is_pending());
        assert!(driver.simulation().is_paused());

        driver.set_visible(true);
        assert!(driver.scheduler().is_pending());
        assert!(driver.frame(Instant::now()).unwrap().advanced);
    }
}
