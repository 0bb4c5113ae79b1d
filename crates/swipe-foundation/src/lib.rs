//! Input foundation for swipe interactions: geometry, pointer events and
//! the drag/tap recognizers that turn raw pointer streams into gestures.

pub mod geometry;
pub mod gesture_constants;
pub mod gestures;
pub mod pointer;

pub use geometry::{Point, Size};
pub use gestures::{DragEvent, DragGesture, GesturePhase, TapGesture};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
