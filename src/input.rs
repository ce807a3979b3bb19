//! Pointer input from window events.
//!
//! [`Input`] turns raw winit cursor and touch events into [`PointerEvent`]s
//! in logical pixels. Only one finger drives the pointer: the first touch to
//! land while no touch is active is tracked until it lifts, and any other
//! fingers are ignored.

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase, WindowEvent};

/// A pointer change the simulation cares about. Positions are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    TouchStarted(Vec2),
    TouchMoved(Vec2),
    TouchEnded,
}

/// Pointer state tracking across events.
#[derive(Debug, Default)]
pub struct Input {
    /// Last known pointer position, logical pixels.
    position: Vec2,
    /// Id of the finger currently driving the pointer.
    active_touch: Option<u64>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position in logical pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_touching(&self) -> bool {
        self.active_touch.is_some()
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = to_logical(*position, scale_factor);
                Some(PointerEvent::Moved(self.position))
            }
            WindowEvent::Touch(touch) => self.handle_touch(touch, scale_factor),
            _ => None,
        }
    }

    fn handle_touch(&mut self, touch: &Touch, scale_factor: f64) -> Option<PointerEvent> {
        self.touch(touch.phase, touch.id, to_logical(touch.location, scale_factor))
    }

    /// Touch state machine on an already converted position.
    pub fn touch(&mut self, phase: TouchPhase, id: u64, position: Vec2) -> Option<PointerEvent> {
        match (phase, self.active_touch) {
            (TouchPhase::Started, None) => {
                self.active_touch = Some(id);
                self.position = position;
                Some(PointerEvent::TouchStarted(position))
            }
            (TouchPhase::Moved, Some(active)) if active == id => {
                self.position = position;
                Some(PointerEvent::TouchMoved(position))
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(active)) if active == id => {
                self.active_touch = None;
                Some(PointerEvent::TouchEnded)
            }
            _ => None,
        }
    }
}

fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x as f32, logical.y as f32)
}
