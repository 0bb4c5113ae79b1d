//! Attaching swipe-to-delete to arbitrary row content.

use super::controller::SwipeController;
use super::presentation::SwipeFrame;
use swipe_core::SchedulerHandle;
use swipe_foundation::{
    DragGesture, GesturePhase, PointerEvent, PointerEventKind, Size, TapGesture,
};

/// Row content with swipe-to-delete behavior attached.
///
/// The host forwards pointer events, layout and appear/disappear
/// notifications, and draws [`SwipeToDelete::frame`] around the content.
pub struct SwipeToDelete<C> {
    content: C,
    controller: SwipeController,
    drag: DragGesture,
    tap: TapGesture,
    tap_armed: bool,
    size: Size,
}

/// Wraps `content` with a fresh controller using the default thresholds.
pub fn swipe_to_delete<C>(
    content: C,
    scheduler: SchedulerHandle,
    on_delete: impl Fn() + 'static,
) -> SwipeToDelete<C> {
    SwipeToDelete::new(content, SwipeController::new(scheduler, on_delete))
}

pub trait SwipeToDeleteExt: Sized {
    fn swipe_to_delete(
        self,
        scheduler: SchedulerHandle,
        on_delete: impl Fn() + 'static,
    ) -> SwipeToDelete<Self> {
        swipe_to_delete(self, scheduler, on_delete)
    }

    fn with_swipe_controller(self, controller: SwipeController) -> SwipeToDelete<Self> {
        SwipeToDelete::new(self, controller)
    }
}

impl<C> SwipeToDeleteExt for C {}

impl<C> SwipeToDelete<C> {
    pub fn new(content: C, controller: SwipeController) -> Self {
        let min_drag = controller.config().min_drag_distance;
        Self {
            content,
            controller,
            drag: DragGesture::new(min_drag),
            tap: TapGesture::default(),
            tap_armed: false,
            size: Size::ZERO,
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn on_layout(&mut self, size: Size) {
        self.size = size;
        self.controller.on_layout(size);
    }

    pub fn on_appear(&mut self) {
        self.reset_recognizers();
        self.controller.on_item_appear();
    }

    pub fn on_disappear(&mut self) {
        self.reset_recognizers();
        self.controller.on_item_disappear();
    }

    pub fn press_delete_button(&self) {
        self.controller.on_delete_button_pressed();
    }

    pub fn frame(&self) -> SwipeFrame {
        SwipeFrame::capture(&self.controller)
    }

    /// Routes a pointer event into the swipe gestures.
    ///
    /// Returns `true` when the event must not reach the content: either the
    /// swipe handled it or the content is disabled because the row is
    /// displaced.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let locked = self.controller.is_interaction_locked();
        if event.kind == PointerEventKind::Down {
            self.tap_armed = locked;
            if !self.tap_armed {
                self.tap.reset();
            }
        }

        if let Some(update) = self.drag.on_event(event) {
            match update.phase {
                GesturePhase::Active => {
                    self.tap.cancel();
                    self.controller.on_drag_changed(update.translation.x);
                }
                GesturePhase::Ended | GesturePhase::Cancelled => {
                    self.controller.on_gesture_phase(update.phase);
                }
                GesturePhase::Idle => {}
            }
            event.consume();
        }

        if self.tap_armed {
            if let Some(position) = self.tap.on_event(event) {
                self.tap_armed = false;
                let on_button = !self.controller.is_deleting()
                    && self
                        .frame()
                        .button_span(self.size.width)
                        .is_some_and(|(start, end)| position.x >= start && position.x <= end);
                if on_button {
                    self.controller.on_delete_button_pressed();
                } else {
                    self.controller.on_tap_while_revealed();
                }
                event.consume();
            }
        }

        event.is_consumed() || locked
    }

    fn reset_recognizers(&mut self) {
        self.drag.reset();
        self.tap.reset();
        self.tap_armed = false;
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for SwipeToDelete<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeToDelete")
            .field("content", &self.content)
            .field("controller", &self.controller)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/attachment_tests.rs"]
mod tests;
