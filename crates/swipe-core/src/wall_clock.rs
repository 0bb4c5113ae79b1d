//! Bridges a [`SerialExecutor`] to real time for live hosts.
//!
//! The driver follows the `WaitUntil` pattern: the host event loop calls
//! [`WallClockDriver::pump`] whenever it wakes up and sleeps until
//! [`WallClockDriver::next_wake`] otherwise, so no busy-polling is needed.

use crate::executor::SerialExecutor;
use crate::scheduler::Scheduler;
use std::rc::Rc;
use web_time::Instant;

pub struct WallClockDriver {
    origin: Instant,
    executor: Rc<SerialExecutor>,
}

impl WallClockDriver {
    /// Starts driving from the executor's current virtual time.
    pub fn new(executor: Rc<SerialExecutor>) -> Self {
        let now = Instant::now();
        let origin = now.checked_sub(executor.now()).unwrap_or(now);
        Self::with_origin(executor, origin)
    }

    /// `origin` is the instant that corresponds to virtual time zero.
    pub fn with_origin(executor: Rc<SerialExecutor>, origin: Instant) -> Self {
        Self { origin, executor }
    }

    pub fn executor(&self) -> &Rc<SerialExecutor> {
        &self.executor
    }

    /// Runs every task that became due up to `now`.
    pub fn pump_at(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.origin);
        self.executor.advance_to(elapsed)
    }

    pub fn pump(&self) -> usize {
        self.pump_at(Instant::now())
    }

    /// Wall-clock instant of the next queued task, if any.
    pub fn next_wake(&self) -> Option<Instant> {
        self.executor
            .next_deadline()
            .map(|deadline| self.origin + deadline)
    }
}
