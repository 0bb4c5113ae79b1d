use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use swipe_ui::{
    Point, PointerEvent, PointerEventKind, SerialExecutor, Size, SwipeRegistry, SwipeToDelete,
    SwipeToDeleteExt,
};

const ROW: Size = Size::new(1080.0, 144.0);
const DRAG_STEPS: usize = 60;
const LIST_SIZES: &[usize] = &[64, 1024];

fn drag(row: &mut SwipeToDelete<usize>, from: f32, to: f32, steps: usize) {
    let y = ROW.height / 2.0;
    let down = Point::new(from, y);
    row.on_pointer_event(&PointerEvent::new(PointerEventKind::Down, down, down));
    for step in 1..=steps {
        let x = from + (to - from) * step as f32 / steps as f32;
        let at = Point::new(x, y);
        row.on_pointer_event(&PointerEvent::new(PointerEventKind::Move, at, at));
    }
    let up = Point::new(to, y);
    row.on_pointer_event(&PointerEvent::new(PointerEventKind::Up, up, up));
}

fn bench_single_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_single_row");

    group.bench_function("peek_and_settle", |b| {
        let executor = Rc::new(SerialExecutor::new());
        let mut row = 0_usize.swipe_to_delete(executor.clone(), || {});
        row.on_layout(ROW);
        b.iter(|| {
            drag(&mut row, 1000.0, 900.0, DRAG_STEPS);
            executor.run_until_idle();
            row.controller().on_tap_while_revealed();
            executor.run_until_idle();
            black_box(row.frame());
        });
    });

    group.bench_function("full_swipe_delete", |b| {
        let executor = Rc::new(SerialExecutor::new());
        let mut row = 0_usize.swipe_to_delete(executor.clone(), || {});
        row.on_layout(ROW);
        b.iter(|| {
            drag(&mut row, 1000.0, 100.0, DRAG_STEPS);
            executor.run_until_idle();
            black_box(row.controller().offset());
        });
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_registry");
    for &items in LIST_SIZES {
        group.bench_with_input(BenchmarkId::new("bind_rows", items), &items, |b, &items| {
            let executor = Rc::new(SerialExecutor::new());
            let mut registry = SwipeRegistry::new(executor, |_: &usize| {});
            // Warm up so lookups, not inserts, are measured.
            for key in 0..items {
                registry.controller(&key);
            }
            b.iter(|| {
                for key in 0..items {
                    let row = key.with_swipe_controller(registry.controller(&key));
                    black_box(row.frame());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_row, bench_registry);
criterion_main!(benches);
