//! Browser Glue
//!
//! Timers, scroll tracking and the selection handoff, each tied to the
//! lifetime of the component that asks for it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use finflex_checkout::{Handoff, SelectionPayload};
use finflex_core::{Rotation, Scheduler};
use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub enum TimerHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

/// [`Scheduler`] over `window.setTimeout` / `window.setInterval`.
///
/// Registration failures are logged and yield no handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimerHandle>;

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(TimerHandle::Timeout(handle)),
            Err(err) => {
                warn!("setTimeout failed: {err:?}");
                None
            }
        }
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> Self::Handle {
        let task = RefCell::new(task);
        match set_interval_with_handle(move || (task.borrow_mut())(), period) {
            Ok(handle) => Some(TimerHandle::Interval(handle)),
            Err(err) => {
                warn!("setInterval failed: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        match handle {
            Some(TimerHandle::Timeout(handle)) => handle.clear(),
            Some(TimerHandle::Interval(handle)) => handle.clear(),
            None => {}
        }
    }
}

/// Repeat `tick` every `period` until it returns `false`
pub fn every_until<S>(scheduler: &S, period: Duration, mut tick: impl FnMut() -> bool + 'static) -> S::Handle
where
    S: Scheduler + Clone + 'static,
    S::Handle: Copy + 'static,
{
    let own = Rc::new(Cell::new(None));
    let slot = own.clone();
    let inner = scheduler.clone();
    let handle = scheduler.every(
        period,
        Box::new(move || {
            if !tick() {
                if let Some(handle) = slot.get() {
                    inner.cancel(handle);
                }
            }
        }),
    );
    own.set(Some(handle));
    handle
}

/// Cycle through `items` every `period` while the calling component lives
pub fn use_rotation<T: Sync + 'static>(items: &'static [T], period: Duration) -> Option<RwSignal<Rotation<T>>> {
    let rotation = match Rotation::new(items) {
        Ok(rotation) => RwSignal::new(rotation),
        Err(err) => {
            warn!("Rotation not started: {err}");
            return None;
        }
    };

    let scheduler = BrowserScheduler;
    let handle = scheduler.every(
        period,
        Box::new(move || {
            rotation.try_update(Rotation::advance);
        }),
    );
    on_cleanup(move || scheduler.cancel(handle));

    Some(rotation)
}

/// `window.scrollY`, updated on every scroll event
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(window().scroll_y().unwrap_or(0.0));
    let listener = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || listener.remove());
    scroll_y
}

/// App-scoped slot carrying a plan choice from pricing to sign-in
#[derive(Clone, Copy)]
pub struct HandoffSlot(StoredValue<Handoff>);

impl HandoffSlot {
    pub fn new() -> Self {
        Self(StoredValue::new(Handoff::new()))
    }

    pub fn offer(&self, payload: SelectionPayload) {
        self.0.update_value(|handoff| handoff.offer(payload));
    }

    pub fn take(&self) -> Option<SelectionPayload> {
        self.0.try_update_value(Handoff::take).flatten()
    }

    pub fn discard(&self) {
        self.0.update_value(Handoff::discard);
    }
}

impl Default for HandoffSlot {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_handoff() -> HandoffSlot {
    use_context::<HandoffSlot>().unwrap_or_else(|| {
        warn!("No handoff slot provided; selections will not reach checkout");
        HandoffSlot::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use finflex_core::motion::CountUp;
    use finflex_core::schedule::ManualScheduler;

    #[test]
    fn test_every_until_stops_itself() {
        let scheduler = ManualScheduler::new();
        let frame = Duration::from_millis(16);
        let counter = CountUp::new(10.0, Duration::from_millis(2500)).suffix("M+");

        let elapsed = Rc::new(Cell::new(Duration::ZERO));
        let rendered = Rc::new(RefCell::new(String::new()));

        let clock = elapsed.clone();
        let out = rendered.clone();
        let tick_counter = counter.clone();
        every_until(&scheduler, frame, move || {
            let now = clock.get() + frame;
            clock.set(now);
            *out.borrow_mut() = tick_counter.render(tick_counter.value_at(now));
            !tick_counter.is_complete(now)
        });

        scheduler.advance(Duration::from_millis(1000));
        assert!(rendered.borrow().ends_with("M+"));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(*rendered.borrow(), "10M+");
        assert_eq!(scheduler.pending(), 0);
        // 2500 / 16 rounded up
        assert_eq!(elapsed.get(), frame * 157);
    }
}
