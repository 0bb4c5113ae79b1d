use anyhow::{bail, Context};
use std::cell::RefCell;
use std::rc::Rc;
use swipe_core::{Duration, SerialExecutor, WallClockDriver};
use swipe_foundation::{Point, PointerEvent, PointerEventKind, Size};
use swipe_ui::{
    AnimationSpec, Easing, SwipeConfig, SwipeRegistry, SwipeToDelete, SwipeToDeleteExt,
};
use web_time::Instant;

const ROW: Size = Size::new(390.0, 72.0);

const MESSAGES: &[(u32, &str)] = &[
    (1, "Quarterly report"),
    (2, "Team lunch"),
    (3, "Password reset"),
    (4, "Newsletter #42"),
    (5, "Flight itinerary"),
];

#[derive(Clone, Debug)]
struct Message {
    id: u32,
    subject: &'static str,
}

struct Inbox {
    executor: Rc<SerialExecutor>,
    messages: Vec<Message>,
    registry: SwipeRegistry<u32>,
    deleted: Rc<RefCell<Vec<u32>>>,
}

impl Inbox {
    fn new(executor: Rc<SerialExecutor>, messages: Vec<Message>) -> anyhow::Result<Self> {
        let config = SwipeConfig::default()
            .with_animation(AnimationSpec::tween(Duration::from_millis(300), Easing::EaseOut));
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let sink = deleted.clone();
        let registry = SwipeRegistry::with_config(executor.clone(), config, move |id: &u32| {
            log::info!("message {id} swiped away");
            sink.borrow_mut().push(*id);
        })
        .context("invalid swipe configuration")?;
        Ok(Self {
            executor,
            messages,
            registry,
            deleted,
        })
    }

    /// Binds the message with `id` into a row, as a list adapter would on
    /// every pass.
    fn row(&mut self, id: u32) -> anyhow::Result<SwipeToDelete<Message>> {
        let Some(message) = self.messages.iter().find(|m| m.id == id).cloned() else {
            bail!("no message with id {id}");
        };
        let mut row = message.with_swipe_controller(self.registry.controller(&id));
        row.on_layout(ROW);
        Ok(row)
    }

    fn apply_deletions(&mut self) {
        let deleted: Vec<u32> = self.deleted.borrow_mut().drain(..).collect();
        if deleted.is_empty() {
            return;
        }
        self.messages.retain(|m| !deleted.contains(&m.id));
        let remaining: Vec<u32> = self.messages.iter().map(|m| m.id).collect();
        self.registry.retain(|id| remaining.contains(id));
    }

    /// Runs queued work deadline by deadline, removing deleted messages as
    /// soon as they are reported.
    fn settle(&mut self) {
        while let Some(deadline) = self.executor.next_deadline() {
            self.executor.advance_to(deadline);
            self.apply_deletions();
        }
    }

    fn print(&mut self, title: &str) -> anyhow::Result<()> {
        println!("--- {title} ---");
        let ids: Vec<u32> = self.messages.iter().map(|m| m.id).collect();
        for id in ids {
            let row = self.row(id)?;
            let frame = row.frame();
            let icon = frame
                .icon
                .as_ref()
                .map(|icon| format!("[{} {}]", icon.symbol, icon.label))
                .unwrap_or_default();
            println!(
                "  {:<24} offset {:>7.1}  background {:>5.1}  {:?} {}",
                row.content().subject,
                frame.content_offset,
                frame.background_width,
                frame.presentation,
                icon
            );
        }
        Ok(())
    }
}

fn send(row: &mut SwipeToDelete<Message>, kind: PointerEventKind, x: f32) -> bool {
    let local = Point::new(x, ROW.height / 2.0);
    row.on_pointer_event(&PointerEvent::new(kind, local, local))
}

fn swipe(row: &mut SwipeToDelete<Message>, from: f32, to: f32) {
    const STEPS: u32 = 8;
    send(row, PointerEventKind::Down, from);
    for step in 1..=STEPS {
        let x = from + (to - from) * step as f32 / STEPS as f32;
        send(row, PointerEventKind::Move, x);
    }
    send(row, PointerEventKind::Up, to);
}

fn tap(row: &mut SwipeToDelete<Message>, x: f32) -> bool {
    send(row, PointerEventKind::Down, x);
    send(row, PointerEventKind::Up, x)
}

fn scripted(inbox: &mut Inbox) -> anyhow::Result<()> {
    inbox.print("inbox")?;

    let mut row = inbox.row(2)?;
    swipe(&mut row, 370.0, 280.0);
    inbox.settle();
    inbox.print("peeked \"Team lunch\"")?;

    let consumed = tap(&mut inbox.row(2)?, 150.0);
    log::debug!("tap on revealed row consumed: {consumed}");
    inbox.settle();
    inbox.print("tapped content to dismiss")?;

    swipe(&mut inbox.row(4)?, 380.0, 40.0);
    inbox.executor.advance_by(Duration::from_millis(150));
    inbox.print("full swipe, mid-animation")?;
    inbox.settle();
    inbox.print("after full swipe")?;

    let mut row = inbox.row(1)?;
    swipe(&mut row, 370.0, 280.0);
    inbox.settle();
    match row.frame().button_span(ROW.width) {
        Some((start, end)) => {
            tap(&mut row, (start + end) / 2.0);
        }
        None => bail!("delete button did not appear after peeking"),
    }
    inbox.settle();
    inbox.print("after tapping the delete button")?;
    Ok(())
}

/// Runs one full swipe against real time, sleeping between frames.
fn live(inbox: &mut Inbox) -> anyhow::Result<()> {
    let driver = WallClockDriver::new(inbox.executor.clone());
    let target = inbox
        .messages
        .last()
        .map(|m| m.id)
        .context("inbox is empty")?;
    swipe(&mut inbox.row(target)?, 380.0, 30.0);

    let started = Instant::now();
    let mut tasks = 0;
    while let Some(wake) = driver.next_wake() {
        std::thread::sleep(wake.saturating_duration_since(Instant::now()));
        tasks += driver.pump();
        inbox.apply_deletions();
    }
    log::info!(
        "live swipe settled after {:?} ({tasks} tasks)",
        started.elapsed()
    );
    inbox.print("after live swipe")
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe-to-delete inbox ===");
    let messages = MESSAGES
        .iter()
        .map(|&(id, subject)| Message { id, subject })
        .collect();

    let executor = Rc::new(SerialExecutor::new());
    let mut inbox = Inbox::new(executor, messages)?;
    scripted(&mut inbox)?;
    live(&mut inbox)?;
    Ok(())
}
