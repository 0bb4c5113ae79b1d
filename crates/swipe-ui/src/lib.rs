//! Swipe-to-delete for list rows.
//!
//! [`SwipeController`] is the per-item state machine: it turns horizontal
//! drag input into a bounded offset, decides on release whether the row
//! snaps back, peeks its delete action, or commits a deletion, and sequences
//! the delayed completion steps on the injected scheduler.
//!
//! [`SwipeToDelete`] attaches a controller to arbitrary row content and
//! routes pointer input, layout and lifecycle into it; [`SwipeRegistry`]
//! keeps controllers keyed by stable item identity.

mod swipe;

pub use swipe::attachment::{swipe_to_delete, SwipeToDelete, SwipeToDeleteExt};
pub use swipe::config::{SwipeConfig, SwipeConfigError};
pub use swipe::controller::{ContainerWidth, SwipeController};
pub use swipe::presentation::{DeleteIcon, SwipeFrame, SwipePresentation, SwipeState};
pub use swipe::registry::SwipeRegistry;

pub use swipe_animation::{AnimationSpec, Easing};
pub use swipe_core::{Duration, SchedulerHandle, SerialExecutor};
pub use swipe_foundation::{GesturePhase, Point, PointerEvent, PointerEventKind, Size};
