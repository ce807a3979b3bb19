//! Backdrop builder and the winit application that runs it.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::driver::RenderDriver;
use crate::error::BackdropError;
use crate::gpu::GpuState;
use crate::input::{Input, PointerEvent};
use crate::simulation::Simulation;
use crate::spawn::SpawnContext;
use crate::tuning::Tuning;
use crate::viewport::WindowSize;

/// A window filled with drifting ember spheres.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Backdrop::new()
///     .with_title("Embers")
///     .with_seed(7)
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct Backdrop {
    title: String,
    initial_size: (u32, u32),
    seed: Option<u64>,
    tuning: Tuning,
}

impl Backdrop {
    /// Create a backdrop with default settings.
    pub fn new() -> Self {
        Self {
            title: "Emberfield".to_string(),
            initial_size: (1280, 720),
            seed: None,
            tuning: Tuning::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn with_initial_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Fix the spawn seed so every run starts from the same scene.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Run the backdrop. This blocks until the window is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: Backdrop,
    driver: Option<RenderDriver<GpuState, Arc<Window>>>,
    input: Input,
    error: Option<BackdropError>,
}

impl App {
    fn new(config: Backdrop) -> Self {
        Self {
            config,
            driver: None,
            input: Input::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BackdropError> {
        let (width, height) = self.config.initial_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = WindowSize::from_physical(window.inner_size(), window.scale_factor());

        let mut spawn = match self.config.seed {
            Some(seed) => {
                info!("Spawning with seed {}", seed);
                SpawnContext::seeded(seed)
            }
            None => SpawnContext::from_clock(),
        };
        let simulation = Simulation::new(size.logical, self.config.tuning, &mut spawn);

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            size.surface(),
            simulation.particles().len(),
        ))?;

        let mut driver = RenderDriver::new(simulation, gpu_state, window);
        driver.start();
        self.driver = Some(driver);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: BackdropError) {
        error!("{}", e);
        if let Some(driver) = &mut self.driver {
            driver.stop();
        }
        self.error = Some(e);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.driver.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(driver) = &mut self.driver else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                driver.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                let scale_factor = driver.scheduler().scale_factor();
                driver.request_resize(WindowSize::from_physical(physical_size, scale_factor), Instant::now());
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let physical_size = driver.scheduler().inner_size();
                driver.request_resize(WindowSize::from_physical(physical_size, scale_factor), Instant::now());
            }
            WindowEvent::Occluded(occluded) => {
                driver.set_visible(!occluded);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = driver.frame(Instant::now()) {
                    self.fail(event_loop, e.into());
                }
            }
            other => {
                let scale_factor = driver.scheduler().scale_factor();
                let Some(pointer) = self.input.handle_event(&other, scale_factor) else {
                    return;
                };

                let simulation = driver.simulation_mut();
                match pointer {
                    PointerEvent::Moved(position) | PointerEvent::TouchMoved(position) => {
                        simulation.pointer_moved(position);
                    }
                    PointerEvent::TouchStarted(position) => simulation.touch_started(position),
                    PointerEvent::TouchEnded => simulation.touch_ended(),
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(driver) = &mut self.driver else {
            return;
        };

        if driver.poll_resize(Instant::now()).is_some() {
            driver.scheduler_mut().request_redraw();
        }

        match driver.resize_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(driver) = &mut self.driver {
            driver.stop();
        }
        debug!("Event loop exiting");
    }
}
