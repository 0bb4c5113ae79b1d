use super::*;
use crate::scheduler::Timer;
use std::cell::RefCell;
use std::rc::Rc;

fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn tasks_run_in_deadline_order() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let log = recorder();

    for (delay, label) in [(300, "late"), (100, "early"), (200, "middle")] {
        let log = log.clone();
        timer
            .run_after(millis(delay), move || log.borrow_mut().push(label))
            .detach();
    }

    assert_eq!(executor.advance_by(millis(1_000)), 3);
    assert_eq!(log.borrow().as_slice(), &["early", "middle", "late"]);
    assert_eq!(executor.now(), millis(1_000));
}

#[test]
fn equal_deadlines_run_in_scheduling_order() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let log = recorder();

    for label in ["first", "second", "third"] {
        let log = log.clone();
        timer
            .run_after(millis(50), move || log.borrow_mut().push(label))
            .detach();
    }

    executor.advance_by(millis(50));
    assert_eq!(log.borrow().as_slice(), &["first", "second", "third"]);
}

#[test]
fn tasks_do_not_run_before_their_deadline() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let log = recorder();
    let sink = log.clone();
    timer
        .run_after(millis(300), move || sink.borrow_mut().push("done"))
        .detach();

    assert_eq!(executor.advance_by(millis(299)), 0);
    assert!(log.borrow().is_empty());
    assert_eq!(executor.advance_by(millis(1)), 1);
    assert_eq!(log.borrow().as_slice(), &["done"]);
}

#[test]
fn dropping_registration_cancels_task() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let log = recorder();
    let sink = log.clone();
    let registration = timer.run_after(millis(10), move || sink.borrow_mut().push("ran"));
    assert_eq!(executor.pending_tasks(), 1);

    drop(registration);

    assert_eq!(executor.pending_tasks(), 0);
    assert_eq!(executor.next_deadline(), None);
    executor.advance_by(millis(100));
    assert!(log.borrow().is_empty());
}

#[test]
fn task_may_cancel_a_later_task_in_the_same_batch() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let log = recorder();

    let victim_slot: Rc<RefCell<Option<crate::TaskRegistration>>> = Rc::new(RefCell::new(None));
    {
        let victim_slot = victim_slot.clone();
        let log = log.clone();
        timer
            .run_after(millis(20), move || {
                log.borrow_mut().push("killer");
                if let Some(victim) = victim_slot.borrow_mut().take() {
                    victim.cancel();
                }
            })
            .detach();
    }
    {
        let log = log.clone();
        let victim = timer.run_after(millis(20), move || log.borrow_mut().push("victim"));
        victim_slot.borrow_mut().replace(victim);
    }

    executor.advance_by(millis(20));
    assert_eq!(log.borrow().as_slice(), &["killer"]);
}

#[test]
fn tasks_scheduled_while_running_use_the_task_deadline_as_base() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let times = Rc::new(RefCell::new(Vec::new()));

    {
        let inner_timer = timer.clone();
        let times = times.clone();
        timer
            .run_after(millis(300), move || {
                times.borrow_mut().push(inner_timer.now());
                let times = times.clone();
                let clock = inner_timer.clone();
                inner_timer
                    .run_after(millis(300), move || times.borrow_mut().push(clock.now()))
                    .detach();
            })
            .detach();
    }

    // A single large jump still fires both steps at their own deadlines.
    assert_eq!(executor.advance_by(millis(2_000)), 2);
    assert_eq!(times.borrow().as_slice(), &[millis(300), millis(600)]);
}

#[test]
fn posted_task_runs_on_run_pending_without_moving_clock() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    executor.advance_by(millis(40));
    let log = recorder();
    let sink = log.clone();
    timer.post(move || sink.borrow_mut().push("posted")).detach();

    assert_eq!(executor.run_pending(), 1);
    assert_eq!(executor.now(), millis(40));
    assert_eq!(log.borrow().as_slice(), &["posted"]);
}

#[test]
fn run_until_idle_drains_chained_tasks() {
    let executor = Rc::new(SerialExecutor::new());
    let timer = Timer::new(executor.clone());
    let count = Rc::new(RefCell::new(0));

    fn chain(timer: Timer, count: Rc<RefCell<u32>>, remaining: u32) {
        if remaining == 0 {
            return;
        }
        let next = timer.clone();
        timer
            .run_after(Duration::from_millis(16), move || {
                *count.borrow_mut() += 1;
                chain(next, count, remaining - 1);
            })
            .detach();
    }

    chain(timer, count.clone(), 5);
    assert_eq!(executor.run_until_idle(), 5);
    assert_eq!(*count.borrow(), 5);
    assert_eq!(executor.now(), millis(80));
    assert!(!executor.has_pending_tasks());
}
