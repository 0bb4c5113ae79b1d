use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away, e.g. a parent scroll view
    /// started scrolling.
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// A swipe that has started dragging consumes the events it handles so the
/// row content underneath does not also treat them as a click.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position relative to the item receiving the event.
    pub position: Point,
    /// Position in window coordinates. Drag translation is measured here so
    /// that moving the item under the pointer does not feed back into it.
    pub global_position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            global_position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Copy of this event re-expressed in another local space, sharing the
    /// consumption flag.
    pub fn with_local_position(&self, position: Point) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            position,
            global_position: self.global_position,
            consumed: self.consumed.clone(),
        }
    }
}
