//! Tap gesture recognizer.

use crate::geometry::Point;
use crate::gesture_constants::TAP_SLOP;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

#[derive(Debug, Clone, PartialEq)]
pub struct TapGesture {
    slop: f32,
    pointer: Option<PointerId>,
    origin: Option<Point>,
    cancelled: bool,
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new(TAP_SLOP)
    }
}

impl TapGesture {
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            pointer: None,
            origin: None,
            cancelled: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some() && !self.cancelled
    }

    /// Feeds a pointer event. Returns the local release position when the
    /// press-release pair qualifies as a tap.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Point> {
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_none() {
                    self.pointer = Some(event.id);
                    self.origin = Some(event.global_position);
                    self.cancelled = false;
                }
                None
            }
            PointerEventKind::Move => {
                if let Some(origin) = self.tracked_origin(event) {
                    if origin.distance_to(event.global_position) > self.slop {
                        self.cancelled = true;
                    }
                }
                None
            }
            PointerEventKind::Up => {
                let origin = self.tracked_origin(event)?;
                let moved = origin.distance_to(event.global_position) > self.slop;
                let cancelled = self.cancelled || event.is_consumed();
                self.reset();
                (!moved && !cancelled).then_some(event.position)
            }
            PointerEventKind::Cancel => {
                if self.tracked_origin(event).is_some() {
                    self.reset();
                }
                None
            }
        }
    }

    /// Abandon the current press; its release will not count as a tap.
    pub fn cancel(&mut self) {
        if self.pointer.is_some() {
            self.cancelled = true;
        }
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.origin = None;
        self.cancelled = false;
    }

    fn tracked_origin(&self, event: &PointerEvent) -> Option<Point> {
        if self.pointer != Some(event.id) {
            return None;
        }
        self.origin
    }
}

#[cfg(test)]
#[path = "../tests/tap_tests.rs"]
mod tests;
