//! Core runtime for swipe interactions.
//!
//! Everything that happens on the "UI thread" of a swipe-enabled list goes
//! through a [`Scheduler`]: delayed completion steps, animation frames and
//! deferred resets. The scheduler is injected so hosts can drive it from
//! their event loop and tests can advance virtual time deterministically.

mod executor;
mod scheduler;
mod wall_clock;

pub use executor::SerialExecutor;
pub use scheduler::{Scheduler, SchedulerHandle, TaskId, TaskRegistration, Timer};
pub use wall_clock::WallClockDriver;

pub use std::time::Duration;
