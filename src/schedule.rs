//! Frame scheduling and debouncing.
//!
//! The render loop never calls itself: after each frame it asks a
//! [`FrameScheduler`] for another one. Windowed runs schedule through winit's
//! `request_redraw`; tests use a [`ManualStepper`] and deliver frames by hand.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

/// Something that can deliver a frame callback later.
pub trait FrameScheduler {
    /// Ask for one more frame. Repeated requests before delivery coalesce.
    fn request_frame(&mut self);
}

impl FrameScheduler for Arc<Window> {
    fn request_frame(&mut self) {
        self.request_redraw();
    }
}

/// Scheduler for tests and headless runs: records requests, the caller
/// decides when frames happen.
#[derive(Debug, Default, Clone)]
pub struct ManualStepper {
    pending: bool,
    requests: u64,
}

impl ManualStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame has been requested and not yet taken.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Total number of requests ever made.
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl FrameScheduler for ManualStepper {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

/// Trailing-edge debouncer.
///
/// Every [`trigger`](Debouncer::trigger) replaces the pending value and
/// restarts the delay; [`poll`](Debouncer::poll) yields the value once the
/// delay has passed without another trigger.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the timer from `now`.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, due)) if now >= due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_stepper_coalesces() {
        let mut stepper = ManualStepper::new();
        assert!(!stepper.take());

        stepper.request_frame();
        stepper.request_frame();
        assert!(stepper.is_pending());
        assert_eq!(stepper.requests(), 2);

        assert!(stepper.take());
        assert!(!stepper.take());
    }

    #[test]
    fn test_debounce_only_last_applies() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(100));

        debounce.trigger(1, start);
        debounce.trigger(2, start + Duration::from_millis(40));
        debounce.trigger(3, start + Duration::from_millis(80));

        // 100ms after the first trigger, but the timer was restarted.
        assert_eq!(debounce.poll(start + Duration::from_millis(120)), None);
        assert_eq!(debounce.deadline(), Some(start + Duration::from_millis(180)));

        assert_eq!(debounce.poll(start + Duration::from_millis(180)), Some(3));
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_debounce_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(100));
        debounce.trigger("resize", start);
        debounce.cancel();
        assert_eq!(debounce.poll(start + Duration::from_secs(1)), None);
    }
}
