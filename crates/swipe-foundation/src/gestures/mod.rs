pub mod drag;
pub mod tap;

pub use drag::{DragEvent, DragGesture};
pub use tap::TapGesture;

/// Lifecycle of a continuous gesture as seen by its consumer.
///
/// Hosts do not always deliver a distinct end event (a scroll container may
/// silently steal the pointer), so `Ended` and `Cancelled` are both terminal
/// and consumers are expected to treat them alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
    Ended,
    Cancelled,
}

impl GesturePhase {
    pub fn is_active(self) -> bool {
        self == GesturePhase::Active
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}
