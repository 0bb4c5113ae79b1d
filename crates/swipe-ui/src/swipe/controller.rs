//! Per-row swipe state machine.
//!
//! States: `Rest -> Dragging -> {Rest | Revealed | CommittingDelete} -> Rest`.
//!
//! The logical `offset` is what thresholds are evaluated against. The
//! rendered offset follows it 1:1 while a drag is active and animates to it
//! on every other change.
//!
//! Committing a deletion schedules two steps on the scheduler, each one
//! completion delay apart: first the host's delete callback, then a reset
//! to rest in case the host never tore this row down. Both steps hold a weak
//! reference and are cancelled on [`SwipeController::dispose`].

use super::config::{SwipeConfig, SwipeConfigError};
use super::presentation::{SwipePresentation, SwipeState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swipe_animation::Animatable;
use swipe_core::{SchedulerHandle, TaskRegistration, Timer};
use swipe_foundation::{GesturePhase, Size};

/// Measured width of the row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ContainerWidth {
    /// Not laid out yet. Behaves as an infinitely wide row, so no release
    /// can cross the delete threshold.
    #[default]
    Unresolved,
    Resolved(f32),
}

impl ContainerWidth {
    pub fn value(self) -> f32 {
        match self {
            ContainerWidth::Unresolved => f32::INFINITY,
            ContainerWidth::Resolved(width) => width,
        }
    }

    pub fn resolved(self) -> Option<f32> {
        match self {
            ContainerWidth::Unresolved => None,
            ContainerWidth::Resolved(width) => Some(width),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Motion {
    /// Rendered offset follows the pointer without animation.
    Track,
    Animate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    Rest,
    Peek,
    CommitDelete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeletionStep {
    AwaitingCallback,
    AwaitingReset,
}

struct PendingDeletion {
    step: DeletionStep,
    _task: TaskRegistration,
}

struct ControllerInner {
    config: SwipeConfig,
    timer: Timer,
    on_delete: Rc<dyn Fn()>,
    offset: f32,
    committed_offset: f32,
    container_width: ContainerWidth,
    gesture: GesturePhase,
    visual_offset: Animatable<f32>,
    affordance_scale: Animatable<f32>,
    deletion: Option<PendingDeletion>,
    disposed: bool,
}

impl ControllerInner {
    fn is_action_revealed(&self) -> bool {
        self.offset / self.config.peek_width > self.config.reveal_fraction
    }

    fn set_offset(&mut self, offset: f32, motion: Motion) {
        self.offset = offset;
        match motion {
            Motion::Track => self.visual_offset.snap_to(offset),
            Motion::Animate => self.visual_offset.animate_to(offset, self.config.animation),
        }
        let scale = if self.is_action_revealed() { 1.0 } else { 0.0 };
        if self.affordance_scale.target() != scale {
            self.affordance_scale.animate_to(scale, self.config.animation);
        }
    }

    fn reset_to_rest(&mut self) {
        self.gesture = GesturePhase::Idle;
        self.set_offset(0.0, Motion::Animate);
        self.committed_offset = 0.0;
    }

    fn resolution_for(&self, offset: f32) -> Resolution {
        if offset < self.config.delete_threshold(self.container_width.value()) {
            Resolution::CommitDelete
        } else if offset < self.config.peek_threshold() {
            Resolution::Peek
        } else {
            Resolution::Rest
        }
    }

    /// Offset of a row swiped all the way out. Without a measured width the
    /// row goes at least as far as the peek position.
    fn full_swipe_offset(&self) -> f32 {
        match self.container_width {
            ContainerWidth::Resolved(width) => -width,
            ContainerWidth::Unresolved => self.offset.min(self.config.peek_width),
        }
    }
}

/// Swipe-to-delete state for one list item. Clones share state.
#[derive(Clone)]
pub struct SwipeController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl SwipeController {
    /// Controller with the default thresholds.
    pub fn new(scheduler: SchedulerHandle, on_delete: impl Fn() + 'static) -> Self {
        Self::build(SwipeConfig::default(), scheduler, Rc::new(on_delete))
    }

    pub fn with_config(
        config: SwipeConfig,
        scheduler: SchedulerHandle,
        on_delete: impl Fn() + 'static,
    ) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        Ok(Self::build(config, scheduler, Rc::new(on_delete)))
    }

    pub(crate) fn build(
        config: SwipeConfig,
        scheduler: SchedulerHandle,
        on_delete: Rc<dyn Fn()>,
    ) -> Self {
        let timer = Timer::new(scheduler);
        let inner = ControllerInner {
            visual_offset: Animatable::new(0.0, timer.clone()),
            affordance_scale: Animatable::new(0.0, timer.clone()),
            config,
            timer,
            on_delete,
            offset: 0.0,
            committed_offset: 0.0,
            container_width: ContainerWidth::Unresolved,
            gesture: GesturePhase::Idle,
            deletion: None,
            disposed: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.inner.borrow().config.clone()
    }

    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    pub fn committed_offset(&self) -> f32 {
        self.inner.borrow().committed_offset
    }

    /// Offset the row content should be drawn at right now.
    pub fn visual_offset(&self) -> f32 {
        self.inner.borrow().visual_offset.value()
    }

    /// Current scale of the delete icon, `0.0` hidden to `1.0` shown.
    pub fn affordance_scale(&self) -> f32 {
        self.inner.borrow().affordance_scale.value()
    }

    pub fn container_width(&self) -> ContainerWidth {
        self.inner.borrow().container_width
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.inner.borrow().gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().gesture.is_active()
    }

    /// Whether the delete icon should be shown.
    pub fn is_action_revealed(&self) -> bool {
        self.inner.borrow().is_action_revealed()
    }

    /// Content is disabled and tap-to-dismiss armed while this holds.
    pub fn is_interaction_locked(&self) -> bool {
        self.inner.borrow().offset != 0.0
    }

    pub fn is_deleting(&self) -> bool {
        self.inner.borrow().deletion.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    pub fn presentation(&self) -> SwipePresentation {
        let inner = self.inner.borrow();
        if inner.deletion.is_some() {
            SwipePresentation::Deleting
        } else if inner.offset != 0.0 {
            SwipePresentation::Revealed
        } else {
            SwipePresentation::Rest
        }
    }

    pub fn state(&self) -> SwipeState {
        let inner = self.inner.borrow();
        if inner.deletion.is_some() {
            SwipeState::CommittingDelete
        } else if inner.gesture.is_active() {
            SwipeState::Dragging
        } else if inner.offset != 0.0 {
            SwipeState::Revealed
        } else {
            SwipeState::Rest
        }
    }

    /// Records the row width from its first layout. Later measurements are
    /// ignored.
    pub fn on_layout(&self, size: Size) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || inner.container_width != ContainerWidth::Unresolved {
            return;
        }
        if size.width.is_finite() && size.width > 0.0 {
            log::trace!("row width resolved to {}", size.width);
            inner.container_width = ContainerWidth::Resolved(size.width);
        }
    }

    /// New horizontal translation of the active drag, measured from where
    /// it started.
    pub fn on_drag_changed(&self, translation: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || inner.deletion.is_some() {
            return;
        }
        inner.gesture = GesturePhase::Active;
        let offset = (inner.committed_offset + translation).min(0.0);
        log::trace!("drag translation {translation} -> offset {offset}");
        inner.set_offset(offset, Motion::Track);
    }

    pub fn on_drag_ended(&self) {
        self.on_gesture_phase(GesturePhase::Ended);
    }

    pub fn on_drag_cancelled(&self) {
        self.on_gesture_phase(GesturePhase::Cancelled);
    }

    /// Host-driven gesture lifecycle. `Ended` and `Cancelled` resolve the
    /// gesture the same way; both are ignored unless a drag is active.
    pub fn on_gesture_phase(&self, phase: GesturePhase) {
        match phase {
            GesturePhase::Idle => {}
            GesturePhase::Active => {
                let mut inner = self.inner.borrow_mut();
                if !inner.disposed && inner.deletion.is_none() {
                    inner.gesture = GesturePhase::Active;
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if !self.inner.borrow().gesture.is_active() {
                    return;
                }
                self.inner.borrow_mut().gesture = phase;
                self.resolve(false);
            }
        }
    }

    /// The revealed delete action was tapped: behave as a full swipe.
    pub fn on_delete_button_pressed(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.deletion.is_some() {
                return;
            }
            let full = inner.full_swipe_offset();
            inner.offset = full;
        }
        self.resolve(true);
    }

    /// Tap on a displaced row: put it back at rest. A committed deletion
    /// keeps its scheduled steps.
    pub fn on_tap_while_revealed(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || inner.offset == 0.0 {
            return;
        }
        log::debug!("tap dismissed revealed action");
        inner.reset_to_rest();
    }

    pub fn on_item_appear(&self) {
        self.reset_for_lifecycle("appear");
    }

    pub fn on_item_disappear(&self) {
        self.reset_for_lifecycle("disappear");
    }

    /// Tears the controller down: pending completion steps are cancelled
    /// and every later input is ignored.
    pub fn dispose(&self) {
        let (deletion, visual, scale) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.gesture = GesturePhase::Idle;
            (
                inner.deletion.take(),
                inner.visual_offset.clone(),
                inner.affordance_scale.clone(),
            )
        };
        if deletion.is_some() {
            log::debug!("disposed with a pending deletion; completion steps cancelled");
        }
        drop(deletion);
        visual.stop();
        scale.stop();
    }

    fn reset_for_lifecycle(&self, event: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        log::trace!("item {event}: resetting to rest");
        // A committed deletion keeps its scheduled steps.
        inner.reset_to_rest();
    }

    fn resolve(&self, force_delete: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.gesture = GesturePhase::Idle;
        let resolution = if force_delete {
            Resolution::CommitDelete
        } else {
            inner.resolution_for(inner.offset)
        };
        log::debug!(
            "swipe released at {} (width {:?}) -> {:?}",
            inner.offset,
            inner.container_width,
            resolution
        );

        match resolution {
            Resolution::Rest => inner.set_offset(0.0, Motion::Animate),
            Resolution::Peek => {
                let peek = inner.config.peek_width;
                inner.set_offset(peek, Motion::Animate);
            }
            Resolution::CommitDelete => {
                let full = inner.full_swipe_offset();
                inner.set_offset(full, Motion::Animate);
                if inner.deletion.is_none() {
                    let task = Self::schedule_step(
                        &inner.timer,
                        inner.config.completion_delay(),
                        Rc::downgrade(&self.inner),
                        Self::on_delete_due,
                    );
                    inner.deletion = Some(PendingDeletion {
                        step: DeletionStep::AwaitingCallback,
                        _task: task,
                    });
                }
            }
        }
        inner.committed_offset = inner.offset;
    }

    fn schedule_step(
        timer: &Timer,
        delay: std::time::Duration,
        weak: Weak<RefCell<ControllerInner>>,
        step: fn(Rc<RefCell<ControllerInner>>),
    ) -> TaskRegistration {
        timer.run_after(delay, move || {
            if let Some(inner) = weak.upgrade() {
                step(inner);
            }
        })
    }

    fn on_delete_due(this: Rc<RefCell<ControllerInner>>) {
        let callback = {
            let mut inner = this.borrow_mut();
            if inner.disposed
                || inner.deletion.as_ref().map(|pending| pending.step)
                    != Some(DeletionStep::AwaitingCallback)
            {
                return;
            }
            // Queued before notifying: a callback that disposes this
            // controller cancels the fallback too.
            let task = Self::schedule_step(
                &inner.timer,
                inner.config.completion_delay(),
                Rc::downgrade(&this),
                Self::on_fallback_reset,
            );
            inner.deletion = Some(PendingDeletion {
                step: DeletionStep::AwaitingReset,
                _task: task,
            });
            inner.on_delete.clone()
        };
        log::debug!("delete animation finished; notifying host");
        callback();
    }

    fn on_fallback_reset(this: Rc<RefCell<ControllerInner>>) {
        let mut inner = this.borrow_mut();
        if inner.disposed {
            return;
        }
        if inner.deletion.as_ref().map(|pending| pending.step) != Some(DeletionStep::AwaitingReset)
        {
            return;
        }
        inner.deletion = None;
        log::warn!("row still attached after delete completion; resetting to rest");
        inner.reset_to_rest();
    }
}

impl std::fmt::Debug for SwipeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SwipeController")
            .field("offset", &inner.offset)
            .field("committed_offset", &inner.committed_offset)
            .field("container_width", &inner.container_width)
            .field("gesture", &inner.gesture)
            .field("deleting", &inner.deletion.is_some())
            .field("disposed", &inner.disposed)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
