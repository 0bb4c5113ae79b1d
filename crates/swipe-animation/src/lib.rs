//! Time-based animations with easing curves, driven by a
//! [`swipe_core::Scheduler`] instead of a display link.

mod animation;
mod easing;

pub use animation::{Animatable, AnimationSpec, Lerp, FRAME_INTERVAL};
pub use easing::Easing;
