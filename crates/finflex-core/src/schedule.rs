//! Timer Scheduling
//!
//! Components that cycle or delay (headline rotation, testimonial carousel,
//! counters, the simulated payment) register callbacks through a
//! [`Scheduler`] and must cancel them on teardown.
//!
//! ```text
//! ┌──────────────┐   every(3s)   ┌───────────────┐
//! │  Component   │──────────────▶│   Scheduler   │
//! │  (owns idx)  │◀──── tick ────│ browser/manual│
//! └──────────────┘   cancel(h)   └───────────────┘
//! ```
//!
//! The browser implementation lives in the web crate. [`ManualScheduler`]
//! drives a virtual clock for deterministic tests.

use std::time::Duration;

/// Single-threaded timer registry
pub trait Scheduler {
    /// Token returned on registration, consumed by [`Scheduler::cancel`]
    type Handle;

    /// Run `task` once after `delay`
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `task` every `period` until cancelled
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

#[cfg(any(test, feature = "test-util"))]
pub use manual::{ManualScheduler, TaskId};

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;
    use std::time::Duration;

    use super::Scheduler;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct TaskId(u64);

    enum Task {
        Once(Box<dyn FnOnce()>),
        Repeating {
            period: Duration,
            run: Box<dyn FnMut()>,
        },
    }

    #[derive(Default)]
    struct Inner {
        now: Duration,
        next_id: u64,
        // Ordered by due time, then registration order
        queue: BTreeMap<(Duration, TaskId), Task>,
        // Repeating task currently executing, and whether it cancelled itself
        running: Option<TaskId>,
        cancelled_while_running: bool,
    }

    /// Virtual-clock scheduler; nothing fires until [`ManualScheduler::advance`]
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Virtual time elapsed so far
        pub fn now(&self) -> Duration {
            self.inner.borrow().now
        }

        /// Number of registered timers
        pub fn pending(&self) -> usize {
            self.inner.borrow().queue.len()
        }

        fn push(&self, delay: Duration, task: Task) -> TaskId {
            let mut inner = self.inner.borrow_mut();
            let id = TaskId(inner.next_id);
            inner.next_id += 1;
            let due = inner.now + delay;
            inner.queue.insert((due, id), task);
            id
        }

        /// Move the clock forward, firing every timer that comes due in order.
        ///
        /// Tasks run without the queue borrowed, so they may register or
        /// cancel timers themselves.
        pub fn advance(&self, by: Duration) {
            let target = self.inner.borrow().now + by;

            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    match inner.queue.keys().next().copied() {
                        Some(key) if key.0 <= target => {
                            inner.now = key.0;
                            inner.queue.remove(&key).map(|task| (key, task))
                        }
                        _ => None,
                    }
                };

                let Some(((due, id), task)) = next else {
                    break;
                };

                match task {
                    Task::Once(run) => run(),
                    Task::Repeating { period, mut run } => {
                        {
                            let mut inner = self.inner.borrow_mut();
                            inner.running = Some(id);
                            inner.cancelled_while_running = false;
                        }
                        run();
                        let mut inner = self.inner.borrow_mut();
                        inner.running = None;
                        if !inner.cancelled_while_running {
                            // Re-arm under the same id so cancel keeps working
                            inner
                                .queue
                                .insert((due + period, id), Task::Repeating { period, run });
                        }
                    }
                }
            }

            self.inner.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = TaskId;

        fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId {
            self.push(delay, Task::Once(task))
        }

        fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskId {
            self.push(period, Task::Repeating { period, run: task })
        }

        fn cancel(&self, handle: TaskId) {
            let mut inner = self.inner.borrow_mut();
            inner.queue.retain(|(_, id), _| *id != handle);
            if inner.running == Some(handle) {
                inner.cancelled_while_running = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_once_fires_at_deadline() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        scheduler.after(Duration::from_millis(2000), Box::new(move || flag.set(true)));

        scheduler.advance(Duration::from_millis(1999));
        assert!(!fired.get());

        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_repeating_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));

        let counter = ticks.clone();
        let handle = scheduler.every(
            Duration::from_secs(3),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(ticks.get(), 3);

        scheduler.cancel(handle);
        scheduler.advance(Duration::from_secs(30));
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_repeating_task_cancels_itself() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let handle = Rc::new(Cell::new(None));

        let counter = ticks.clone();
        let own_handle = handle.clone();
        let inner_scheduler = scheduler.clone();
        let id = scheduler.every(
            Duration::from_millis(16),
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    if let Some(id) = own_handle.get() {
                        inner_scheduler.cancel(id);
                    }
                }
            }),
        );
        handle.set(Some(id));

        scheduler.advance(Duration::from_millis(160));
        assert_eq!(ticks.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_task_can_schedule_more() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let log = order.clone();
        scheduler.after(
            Duration::from_millis(10),
            Box::new(move || {
                log.borrow_mut().push("first");
                let log = log.clone();
                inner_scheduler.after(
                    Duration::from_millis(5),
                    Box::new(move || log.borrow_mut().push("second")),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
        assert_eq!(scheduler.now(), Duration::from_millis(20));
    }
}
