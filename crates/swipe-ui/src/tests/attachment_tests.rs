use super::*;

use crate::swipe::presentation::SwipePresentation;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipe_core::SerialExecutor;
use swipe_foundation::Point;

const ROW: Size = Size::new(400.0, 64.0);
const ORIGIN: Point = Point::new(20.0, 300.0);

struct Row {
    executor: Rc<SerialExecutor>,
    row: SwipeToDelete<&'static str>,
    deletions: Rc<Cell<u32>>,
}

fn row() -> Row {
    let executor = Rc::new(SerialExecutor::new());
    let deletions = Rc::new(Cell::new(0));
    let counter = deletions.clone();
    let mut row = swipe_to_delete("Inbox item", executor.clone(), move || {
        counter.set(counter.get() + 1)
    });
    row.on_layout(ROW);
    row.on_appear();
    Row {
        executor,
        row,
        deletions,
    }
}

fn pointer(kind: PointerEventKind, x: f32) -> PointerEvent {
    let local = Point::new(x, 32.0);
    PointerEvent::new(kind, local, local + ORIGIN)
}

impl Row {
    fn send(&mut self, kind: PointerEventKind, x: f32) -> bool {
        self.row.on_pointer_event(&pointer(kind, x))
    }

    fn drag(&mut self, from: f32, to: f32) {
        self.send(PointerEventKind::Down, from);
        self.send(PointerEventKind::Move, to);
        self.send(PointerEventKind::Up, to);
    }

    fn tap(&mut self, x: f32) -> bool {
        self.send(PointerEventKind::Down, x);
        self.send(PointerEventKind::Up, x)
    }

    fn settle(&self) {
        self.executor.advance_by(Duration::from_millis(300));
    }
}

#[test]
fn drag_and_release_peeks_the_delete_action() {
    let mut r = row();
    assert!(!r.send(PointerEventKind::Down, 380.0));
    assert!(r.send(PointerEventKind::Move, 290.0));
    assert_eq!(r.row.controller().offset(), -90.0);
    assert!(r.send(PointerEventKind::Up, 290.0));
    r.settle();

    let frame = r.row.frame();
    assert_eq!(frame.content_offset, -80.0);
    assert!(!frame.content_enabled);
    assert!(frame.tap_to_dismiss_armed);
    assert_eq!(frame.background_width, 80.0);
    assert_eq!(frame.button_width, 80.0);
    assert_eq!(frame.presentation, SwipePresentation::Revealed);
    let icon = frame.icon.as_ref().expect("delete icon shown");
    assert_eq!(icon.symbol, "trash.fill");
    assert_eq!(icon.label, "Delete");
    assert_eq!(icon.scale, 1.0);
    assert_eq!(frame.button_span(ROW.width), Some((320.0, 400.0)));
}

#[test]
fn tap_while_deleting_restores_the_row() {
    let mut r = row();
    r.drag(390.0, 80.0);
    assert!(r.row.controller().is_deleting());

    // Lands inside the trailing button strip; deletion is already under way.
    assert!(r.tap(370.0));
    assert_eq!(r.row.controller().offset(), 0.0);
    assert!(r.row.controller().is_deleting());

    r.settle();
    assert_eq!(r.deletions.get(), 1);
}

#[test]
fn movement_below_minimum_distance_reaches_content() {
    let mut r = row();
    assert!(!r.send(PointerEventKind::Down, 200.0));
    assert!(!r.send(PointerEventKind::Move, 193.0));
    assert!(!r.send(PointerEventKind::Up, 193.0));
    assert_eq!(r.row.controller().offset(), 0.0);
}

#[test]
fn tap_at_rest_is_left_to_content() {
    let mut r = row();
    assert!(!r.tap(100.0));
    assert_eq!(r.row.controller().offset(), 0.0);
    assert!(r.row.frame().content_enabled);
}

#[test]
fn tap_on_revealed_content_dismisses() {
    let mut r = row();
    r.drag(380.0, 290.0);
    r.settle();

    assert!(r.tap(100.0));
    assert_eq!(r.row.controller().offset(), 0.0);
    r.settle();
    assert_eq!(r.row.frame().content_offset, 0.0);
    assert_eq!(r.deletions.get(), 0);
}

#[test]
fn tap_on_delete_button_commits() {
    let mut r = row();
    r.drag(380.0, 290.0);
    r.settle();

    assert!(r.tap(360.0));
    assert_eq!(r.row.controller().offset(), -400.0);
    assert_eq!(r.row.frame().presentation, SwipePresentation::Deleting);
    r.settle();
    assert_eq!(r.deletions.get(), 1);
}

#[test]
fn second_drag_continues_from_peek() {
    let mut r = row();
    r.drag(380.0, 290.0);
    r.settle();

    r.drag(300.0, 100.0);
    assert_eq!(r.row.controller().offset(), -80.0);
    assert_eq!(r.deletions.get(), 0);

    r.drag(300.0, 70.0);
    assert_eq!(r.row.controller().offset(), -400.0);
    r.settle();
    assert_eq!(r.deletions.get(), 1);
}

#[test]
fn drag_on_revealed_row_does_not_count_as_tap() {
    let mut r = row();
    r.drag(380.0, 290.0);
    r.settle();

    r.send(PointerEventKind::Down, 200.0);
    r.send(PointerEventKind::Move, 260.0);
    assert_eq!(r.row.controller().offset(), -20.0);
    r.send(PointerEventKind::Up, 260.0);
    assert_eq!(r.row.controller().offset(), 0.0);
    assert_eq!(r.deletions.get(), 0);
}

#[test]
fn pointer_cancel_resolves_the_swipe() {
    let mut r = row();
    r.send(PointerEventKind::Down, 380.0);
    r.send(PointerEventKind::Move, 280.0);
    assert!(r.send(PointerEventKind::Cancel, 280.0));
    assert_eq!(r.row.controller().offset(), -80.0);
}

#[test]
fn disappearing_mid_drag_drops_the_gesture() {
    let mut r = row();
    r.send(PointerEventKind::Down, 380.0);
    r.send(PointerEventKind::Move, 300.0);
    r.row.on_disappear();
    assert_eq!(r.row.controller().offset(), 0.0);

    r.send(PointerEventKind::Up, 300.0);
    assert_eq!(r.row.controller().offset(), 0.0);
    assert_eq!(r.row.controller().committed_offset(), 0.0);
}

#[test]
fn frame_tracks_drag_before_reveal() {
    let mut r = row();
    r.send(PointerEventKind::Down, 380.0);
    r.send(PointerEventKind::Move, 330.0);
    let frame = r.row.frame();
    assert_eq!(frame.content_offset, -50.0);
    assert_eq!(frame.background_width, 50.0);
    assert_eq!(frame.button_width, 50.0);
    assert_eq!(frame.icon, None);
    assert_eq!(frame.button_span(ROW.width), None);

    r.send(PointerEventKind::Move, 200.0);
    let frame = r.row.frame();
    assert_eq!(frame.background_width, 180.0);
    assert_eq!(frame.button_width, 80.0);
    assert!(frame.icon.is_some());
}

#[test]
fn extension_trait_wraps_any_content() {
    let executor = Rc::new(SerialExecutor::new());
    let mut wrapped = 42_u32.swipe_to_delete(executor, || {});
    *wrapped.content_mut() += 1;
    assert_eq!(*wrapped.content(), 43);
    assert_eq!(wrapped.controller().offset(), 0.0);
    assert_eq!(wrapped.into_content(), 43);
}
