use std::rc::Rc;
use std::time::Duration;

pub type TaskId = u64;

/// A serial queue of delayed tasks.
///
/// Implementations run at most one task at a time, in deadline order, and
/// tasks scheduled for the same instant run in the order they were
/// scheduled. Tasks may schedule or cancel other tasks while running.
pub trait Scheduler {
    /// Current time on the scheduler's clock, measured from its origin.
    fn now(&self) -> Duration;

    /// Queue `task` to run once `delay` has elapsed.
    fn schedule_after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId;

    /// Drop a queued task. Unknown or already-executed ids are ignored.
    fn cancel(&self, id: TaskId);
}

pub type SchedulerHandle = Rc<dyn Scheduler>;

/// Convenience front for a [`SchedulerHandle`] that hands out
/// [`TaskRegistration`]s instead of raw ids.
#[derive(Clone)]
pub struct Timer {
    scheduler: SchedulerHandle,
}

impl Timer {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> SchedulerHandle {
        self.scheduler.clone()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn run_after(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> TaskRegistration {
        let id = self.scheduler.schedule_after(delay, Box::new(callback));
        TaskRegistration::new(self.scheduler.clone(), id)
    }

    /// Queue `callback` behind everything already due right now.
    pub fn post(&self, callback: impl FnOnce() + 'static) -> TaskRegistration {
        self.run_after(Duration::ZERO, callback)
    }
}

/// Handle to a scheduled task. Dropping it cancels the task.
pub struct TaskRegistration {
    scheduler: SchedulerHandle,
    id: Option<TaskId>,
}

impl TaskRegistration {
    fn new(scheduler: SchedulerHandle, id: TaskId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Let the task run even though this handle goes away.
    pub fn detach(mut self) -> Option<TaskId> {
        self.id.take()
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl std::fmt::Debug for TaskRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistration")
            .field("id", &self.id)
            .finish()
    }
}
