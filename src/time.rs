//! Frame timing.
//!
//! Simulation time is not wall-clock time: it advances by a fixed step every
//! frame, so apparent speed follows the display refresh rate. Wall-clock
//! instants are only used to measure FPS, and they are passed in by the
//! caller so tests can drive the clock by hand.
//!
//! # Example
//!
//! ```ignore
//! use emberfield::time::Time;
//!
//! let mut time = Time::new(0.006);
//!
//! // In the frame callback:
//! time.tick(Instant::now());
//!
//! println!("Sim time: {:.3}", time.elapsed());
//! println!("Frame: {}", time.frame());
//! println!("FPS: {:.1}", time.fps());
//! ```

use std::time::{Duration, Instant};

/// Frame-driven clock.
#[derive(Debug)]
pub struct Time {
    /// Simulation time added per frame.
    step: f32,
    /// Frames advanced since start (paused frames excluded).
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Instant of last FPS calculation; `None` until the first tick.
    fps_update_time: Option<Instant>,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Whether time is paused.
    paused: bool,
}

impl Time {
    /// Create a clock advancing `step` per frame.
    pub fn new(step: f32) -> Self {
        Self {
            step,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: None,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Advance one frame. Call once per frame.
    ///
    /// Returns `false` without advancing while paused.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }

        self.frame_count += 1;

        match self.fps_update_time {
            None => {
                self.fps_update_time = Some(now);
                self.fps_frame_count = self.frame_count;
            }
            Some(last) => {
                let since = now.saturating_duration_since(last);
                if since >= self.fps_update_interval {
                    let frames = self.frame_count - self.fps_frame_count;
                    self.fps = frames as f32 / since.as_secs_f32();
                    self.fps_frame_count = self.frame_count;
                    self.fps_update_time = Some(now);
                }
            }
        }

        true
    }

    /// Total simulation time, derived from the frame count in `f64`.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.frame_count as f64 * f64::from(self.step)
    }

    /// Simulation time added per frame.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop time progression. While paused, `tick()` is a no-op.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after pausing. FPS measurement restarts so the paused gap
    /// doesn't drag the average down.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.fps_update_time = None;
        }
    }
}
