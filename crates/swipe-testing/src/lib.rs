//! Testing utilities and harness for swipe interactions

pub mod assertions;
pub mod rule;

pub use assertions::*;
pub use rule::{SwipeTestRule, TestRow};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::rule::{SwipeTestRule, TestRow};
    pub use swipe_ui::{SwipePresentation, SwipeState};
}
