//! Deterministic test rule for swipe-enabled rows.
//!
//! # Example
//!
//! ```
//! use swipe_testing::SwipeTestRule;
//!
//! let rule = SwipeTestRule::new();
//! let mut row = rule.row("Groceries", 400.0);
//!
//! row.drag(380.0, 290.0);
//! rule.advance_millis(300);
//!
//! assert_eq!(row.offset(), -80.0);
//! assert_eq!(row.deletion_count(), 0);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipe_core::{Scheduler, SchedulerHandle, SerialExecutor};
use swipe_foundation::{Point, PointerEvent, PointerEventKind, Size};
use swipe_ui::{
    swipe_to_delete, SwipeConfig, SwipeConfigError, SwipeController, SwipeFrame, SwipeState,
    SwipeToDelete,
};

/// Default row height used by [`SwipeTestRule::row`].
pub const ROW_HEIGHT: f32 = 64.0;

/// Owns the virtual clock every row created from it runs on.
pub struct SwipeTestRule {
    executor: Rc<SerialExecutor>,
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTestRule {
    pub fn new() -> Self {
        Self {
            executor: Rc::new(SerialExecutor::new()),
        }
    }

    pub fn executor(&self) -> &Rc<SerialExecutor> {
        &self.executor
    }

    pub fn scheduler(&self) -> SchedulerHandle {
        self.executor.clone()
    }

    /// A laid-out, appeared row with default thresholds.
    pub fn row(&self, label: &str, width: f32) -> TestRow {
        let deletions = Rc::new(Cell::new(0));
        let counter = deletions.clone();
        let row = swipe_to_delete(label.to_string(), self.scheduler(), move || {
            counter.set(counter.get() + 1)
        });
        TestRow::attach(row, deletions, width)
    }

    pub fn row_with_config(
        &self,
        label: &str,
        width: f32,
        config: SwipeConfig,
    ) -> Result<TestRow, SwipeConfigError> {
        let deletions = Rc::new(Cell::new(0));
        let counter = deletions.clone();
        let controller = SwipeController::with_config(config, self.scheduler(), move || {
            counter.set(counter.get() + 1)
        })?;
        let row = SwipeToDelete::new(label.to_string(), controller);
        Ok(TestRow::attach(row, deletions, width))
    }

    pub fn now_millis(&self) -> u128 {
        self.executor.now().as_millis()
    }

    /// Advance virtual time, running every task that falls due.
    pub fn advance_millis(&self, millis: u64) -> usize {
        self.executor.advance_by(Duration::from_millis(millis))
    }

    pub fn advance(&self, duration: Duration) -> usize {
        self.executor.advance_by(duration)
    }

    /// Run until no task is queued, i.e. every animation settled and every
    /// completion step fired.
    pub fn wait_for_idle(&self) -> usize {
        self.executor.run_until_idle()
    }

    pub fn is_idle(&self) -> bool {
        !self.executor.has_pending_tasks()
    }
}

/// A row under test plus a record of its delete notifications.
pub struct TestRow {
    row: SwipeToDelete<String>,
    deletions: Rc<Cell<u32>>,
    /// Window position of the row's top-left corner.
    origin: Point,
    next_pointer: u64,
    pointer: u64,
}

impl TestRow {
    fn attach(mut row: SwipeToDelete<String>, deletions: Rc<Cell<u32>>, width: f32) -> Self {
        row.on_layout(Size::new(width, ROW_HEIGHT));
        row.on_appear();
        Self {
            row,
            deletions,
            origin: Point::new(0.0, 120.0),
            next_pointer: 1,
            pointer: 0,
        }
    }

    pub fn label(&self) -> &str {
        self.row.content()
    }

    pub fn row(&mut self) -> &mut SwipeToDelete<String> {
        &mut self.row
    }

    pub fn controller(&self) -> &SwipeController {
        self.row.controller()
    }

    pub fn frame(&self) -> SwipeFrame {
        self.row.frame()
    }

    pub fn offset(&self) -> f32 {
        self.controller().offset()
    }

    pub fn visual_offset(&self) -> f32 {
        self.controller().visual_offset()
    }

    pub fn state(&self) -> SwipeState {
        self.controller().state()
    }

    pub fn deletion_count(&self) -> u32 {
        self.deletions.get()
    }

    /// Moves the row in window space, e.g. after the list scrolled.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Sends a pointer event at local `x`, vertically centred. Returns
    /// whether the swipe kept it from the content.
    pub fn send(&mut self, kind: PointerEventKind, x: f32) -> bool {
        if kind == PointerEventKind::Down {
            self.pointer = self.next_pointer;
            self.next_pointer += 1;
        }
        let local = Point::new(x, ROW_HEIGHT / 2.0);
        let event = PointerEvent::new(kind, local, local + self.origin).with_id(self.pointer);
        self.row.on_pointer_event(&event)
    }

    pub fn press(&mut self, x: f32) -> bool {
        self.send(PointerEventKind::Down, x)
    }

    pub fn move_to(&mut self, x: f32) -> bool {
        self.send(PointerEventKind::Move, x)
    }

    pub fn release(&mut self, x: f32) -> bool {
        self.send(PointerEventKind::Up, x)
    }

    pub fn cancel(&mut self, x: f32) -> bool {
        self.send(PointerEventKind::Cancel, x)
    }

    /// Press at `from`, move to `to` in `steps` moves, release at `to`.
    pub fn drag_in_steps(&mut self, from: f32, to: f32, steps: u32) {
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from + (to - from) * step as f32 / steps as f32;
            self.move_to(x);
        }
        self.release(to);
    }

    pub fn drag(&mut self, from: f32, to: f32) {
        self.drag_in_steps(from, to, 1);
    }

    pub fn tap(&mut self, x: f32) -> bool {
        self.press(x);
        self.release(x)
    }

    /// Taps the middle of the revealed delete button.
    pub fn tap_delete_button(&mut self) -> bool {
        let width = self.row.size().width;
        match self.frame().button_span(width) {
            Some((start, end)) => self.tap((start + end) / 2.0),
            None => panic!("delete button is not visible: {:?}", self.frame()),
        }
    }

    pub fn appear(&mut self) {
        self.row.on_appear();
    }

    pub fn disappear(&mut self) {
        self.row.on_disappear();
    }
}
