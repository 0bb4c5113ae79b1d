//! Tween animations stepped by scheduler frames.
//!
//! An [`Animatable`] holds a value that either tracks input directly
//! ([`Animatable::snap_to`]) or moves towards a target over time
//! ([`Animatable::animate_to`]). Frames are scheduled on the injected
//! [`Timer`], so virtual time in tests produces exact, repeatable samples.

use crate::easing::Easing;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use swipe_core::{TaskRegistration, Timer};

/// Spacing between animation frames (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Animation specification combining duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::tween(duration, Easing::Linear)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time from the start of the animation until it settles on its target.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(Duration::from_millis(300), Easing::Smooth)
    }
}

/// Animated value holder. Clones share the same underlying value.
pub struct Animatable<T: Lerp + Clone + PartialEq + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T> {
    timer: Timer,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    started_at: Option<Duration>,
    frame: Option<TaskRegistration>,
}

impl<T> AnimatableInner<T> {
    /// Delay until the next frame; the last frame lands exactly on the end
    /// of the animation.
    fn next_frame_delay(&self, now: Duration) -> Duration {
        let end = self.started_at.unwrap_or(now) + self.spec.total();
        end.saturating_sub(now).min(FRAME_INTERVAL)
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Animatable<T> {
    pub fn new(initial: T, timer: Timer) -> Self {
        let inner = AnimatableInner {
            timer,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            started_at: None,
            frame: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().started_at.is_some()
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        let stale = {
            let mut inner = self.inner.borrow_mut();
            inner.current = value.clone();
            inner.start = value.clone();
            inner.target = value;
            inner.started_at = None;
            inner.frame.take()
        };
        drop(stale);
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        if spec.total().is_zero() {
            self.snap_to(target);
            return;
        }
        let stale = {
            let mut inner = self.inner.borrow_mut();
            let settled_there = inner.started_at.is_none() && inner.current == target;
            let heading_there = inner.started_at.is_some() && inner.target == target;
            if settled_there || heading_there {
                return;
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.started_at = Some(inner.timer.now());
            inner.frame.take()
        };
        drop(stale);
        Self::schedule_frame(&self.inner);
    }

    /// Stop wherever the value currently is.
    pub fn stop(&self) {
        let current = self.value();
        self.snap_to(current);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (timer, delay) = {
            let inner = this.borrow();
            if inner.frame.is_some() {
                return;
            }
            (inner.timer.clone(), inner.next_frame_delay(inner.timer.now()))
        };
        let weak: Weak<RefCell<AnimatableInner<T>>> = Rc::downgrade(this);
        let registration = timer.run_after(delay, move || {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong);
            }
        });
        this.borrow_mut().frame = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.frame = None;
            let Some(started_at) = inner.started_at else {
                return;
            };
            let now = inner.timer.now();
            let elapsed = now.saturating_sub(started_at);
            let spec = inner.spec;

            if elapsed < spec.delay {
                true
            } else {
                let running = elapsed - spec.delay;
                let linear = if spec.duration.is_zero() {
                    1.0
                } else {
                    (running.as_secs_f32() / spec.duration.as_secs_f32()).clamp(0.0, 1.0)
                };

                if linear >= 1.0 {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.started_at = None;
                    false
                } else {
                    let progress = spec.easing.transform(linear);
                    inner.current = inner.start.lerp(&inner.target, progress);
                    true
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Lerp + Clone + PartialEq + std::fmt::Debug + 'static> std::fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &inner.started_at.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
