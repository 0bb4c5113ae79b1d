//! Drag gesture recognizer.
//!
//! Tracks one pointer from press to release and reports its translation in
//! global coordinates once it has moved at least `min_distance`.

use super::GesturePhase;
use crate::geometry::Point;
use crate::gesture_constants::MIN_DRAG_DISTANCE;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId};

/// One update of a recognized drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub phase: GesturePhase,
    /// Offset of the pointer from where it was pressed.
    pub translation: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    min_distance: f32,
    pointer: Option<PointerId>,
    origin: Option<Point>,
    translation: Point,
    phase: GesturePhase,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(MIN_DRAG_DISTANCE)
    }
}

impl DragGesture {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
            pointer: None,
            origin: None,
            translation: Point::ZERO,
            phase: GesturePhase::Idle,
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_active()
    }

    /// Feeds a pointer event. Returns an update only once the drag has been
    /// recognized; presses and sub-threshold moves are absorbed silently.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_some() {
                    return None;
                }
                self.pointer = Some(event.id);
                self.origin = Some(event.global_position);
                self.translation = Point::ZERO;
                self.phase = GesturePhase::Idle;
                None
            }
            PointerEventKind::Move => {
                let origin = self.tracked_origin(event)?;
                self.translation = event.global_position - origin;
                if !self.phase.is_active() {
                    if self.translation.length() < self.min_distance {
                        return None;
                    }
                    log::trace!("drag recognized after {:?}", self.translation);
                    self.phase = GesturePhase::Active;
                }
                Some(self.emit(GesturePhase::Active))
            }
            PointerEventKind::Up => {
                let origin = self.tracked_origin(event)?;
                let was_active = self.phase.is_active();
                let translation = event.global_position - origin;
                self.reset();
                was_active.then(|| DragEvent {
                    phase: GesturePhase::Ended,
                    translation,
                })
            }
            PointerEventKind::Cancel => {
                self.tracked_origin(event)?;
                let was_active = self.phase.is_active();
                let translation = self.translation;
                self.reset();
                was_active.then_some(DragEvent {
                    phase: GesturePhase::Cancelled,
                    translation,
                })
            }
        }
    }

    /// Forgets the tracked pointer without reporting anything.
    pub fn reset(&mut self) {
        self.pointer = None;
        self.origin = None;
        self.translation = Point::ZERO;
        self.phase = GesturePhase::Idle;
    }

    fn tracked_origin(&self, event: &PointerEvent) -> Option<Point> {
        if self.pointer != Some(event.id) {
            return None;
        }
        self.origin
    }

    fn emit(&self, phase: GesturePhase) -> DragEvent {
        DragEvent {
            phase,
            translation: self.translation,
        }
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
