//! Virtual-time serial executor.
//!
//! The executor never looks at a real clock. Time only moves when the host
//! calls [`SerialExecutor::advance_to`] / [`SerialExecutor::advance_by`], which
//! makes every delayed step of an interaction reproducible in tests.

use crate::scheduler::{Scheduler, TaskId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Upper bound on batches processed by [`SerialExecutor::run_until_idle`].
const MAX_IDLE_BATCHES: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    due: Duration,
    id: TaskId,
}

#[derive(Default)]
struct ExecutorState {
    now: Duration,
    next_id: TaskId,
    queue: BinaryHeap<Reverse<QueueEntry>>,
    tasks: FxHashMap<TaskId, Box<dyn FnOnce()>>,
}

impl ExecutorState {
    /// Drops heap entries whose task was cancelled.
    fn prune_cancelled(&mut self) {
        while let Some(Reverse(entry)) = self.queue.peek() {
            if self.tasks.contains_key(&entry.id) {
                break;
            }
            self.queue.pop();
        }
    }

    fn next_deadline(&mut self) -> Option<Duration> {
        self.prune_cancelled();
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Removes every live entry sharing the earliest deadline, if that
    /// deadline is not later than `limit`.
    fn take_due_batch(&mut self, limit: Duration) -> Option<(Duration, SmallVec<[TaskId; 4]>)> {
        let due = self.next_deadline()?;
        if due > limit {
            return None;
        }
        let mut batch = SmallVec::new();
        while let Some(Reverse(entry)) = self.queue.peek().copied() {
            if entry.due != due {
                break;
            }
            self.queue.pop();
            if self.tasks.contains_key(&entry.id) {
                batch.push(entry.id);
            }
        }
        Some((due, batch))
    }
}

/// Single-threaded scheduler with a manually advanced clock.
#[derive(Default)]
pub struct SerialExecutor {
    state: RefCell<ExecutorState>,
}

impl SerialExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still waiting to run.
    pub fn pending_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.pending_tasks() > 0
    }

    /// Deadline of the earliest queued task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow_mut().next_deadline()
    }

    /// Runs everything that is due without moving the clock.
    pub fn run_pending(&self) -> usize {
        let now = self.now();
        self.advance_to(now)
    }

    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        self.advance_to(target)
    }

    /// Moves the clock forward to `target`, running every task due on the
    /// way. Returns the number of tasks executed. A `target` in the past
    /// only runs the tasks that are already due.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut executed = 0;
        loop {
            let batch = self.state.borrow_mut().take_due_batch(target);
            let Some((due, ids)) = batch else {
                break;
            };
            {
                let mut state = self.state.borrow_mut();
                if due > state.now {
                    state.now = due;
                }
            }
            for id in ids {
                // Earlier tasks of the batch may have cancelled this one.
                let task = self.state.borrow_mut().tasks.remove(&id);
                if let Some(task) = task {
                    task();
                    executed += 1;
                }
            }
        }
        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        executed
    }

    /// Advances through queued deadlines until nothing is left.
    pub fn run_until_idle(&self) -> usize {
        let mut executed = 0;
        for _ in 0..MAX_IDLE_BATCHES {
            let Some(deadline) = self.next_deadline() else {
                return executed;
            };
            executed += self.advance_to(deadline);
        }
        log::warn!(
            "executor still busy after {MAX_IDLE_BATCHES} batches; {} tasks pending",
            self.pending_tasks()
        );
        executed
    }
}

impl Scheduler for SerialExecutor {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn schedule_after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.push(Reverse(QueueEntry { due, id }));
        state.tasks.insert(id, task);
        id
    }

    fn cancel(&self, id: TaskId) {
        // The task is dropped outside the borrow: its captures may own
        // registrations that cancel other tasks.
        let removed = self.state.borrow_mut().tasks.remove(&id);
        if removed.is_some() {
            log::trace!("cancelled task {id}");
        }
    }
}

#[cfg(test)]
#[path = "tests/executor_tests.rs"]
mod tests;
