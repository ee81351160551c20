//! Status message cycler: rotates through a fixed list of progress strings on
//! a repeating timer while some long-running request is pending. It knows
//! nothing about the request itself and performs no I/O.
//!
//! The timer comes from an injected `Scheduler`. Its guard is owned by the
//! `CyclerHandle`, so stopping or dropping the handle cancels the timer.

use std::{cell::Cell, rc::Rc};

/// Progress strings shown while an insight report is prepared.
pub const RESEARCH_STATUS_MESSAGES: &[&str] = &[
    "Gathering market data...",
    "Reading recent filings...",
    "Scanning news sentiment...",
    "Comparing sector peers...",
    "Preparing your insight report...",
];

/// Repeating timer capability. Dropping the returned guard cancels the timer.
pub trait Scheduler {
    type Guard;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Guard;
}

#[derive(Debug)]
struct CyclerState {
    messages: Vec<String>,
    index: Cell<usize>,
    running: Cell<bool>,
}

/// A running (or stopped) cycle. Holds the timer guard.
pub struct CyclerHandle<G> {
    state: Rc<CyclerState>,
    guard: Option<G>,
}

/// Starts cycling at index 0; `on_advance` receives each new index.
pub fn start<S, M>(
    scheduler: &S,
    interval_ms: u32,
    messages: M,
    mut on_advance: impl FnMut(usize) + 'static,
) -> CyclerHandle<S::Guard>
where
    S: Scheduler,
    M: IntoIterator,
    M::Item: Into<String>,
{
    let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
    let running = !messages.is_empty();
    let state = Rc::new(CyclerState {
        messages,
        index: Cell::new(0),
        running: Cell::new(running),
    });

    // An empty list has nothing to rotate, so no timer is acquired.
    let guard = running.then(|| {
        let tick_state = Rc::clone(&state);
        scheduler.every(
            interval_ms,
            Box::new(move || {
                if !tick_state.running.get() {
                    return;
                }
                let next = (tick_state.index.get() + 1) % tick_state.messages.len();
                tick_state.index.set(next);
                on_advance(next);
            }),
        )
    });
    tracing::debug!(interval_ms, messages = state.messages.len(), "status cycler started");

    CyclerHandle { state, guard }
}

impl<G> CyclerHandle<G> {
    pub fn current_index(&self) -> usize {
        self.state.index.get()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.state
            .messages
            .get(self.state.index.get())
            .map(String::as_str)
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancels the timer. The index keeps its last value.
    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        self.state.running.set(false);
        if self.guard.take().is_some() {
            tracing::debug!(index = self.state.index.get(), "status cycler stopped");
        }
    }
}

impl<G> Drop for CyclerHandle<G> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Browser interval timer. Cancelled when the `Interval` is dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for IntervalScheduler {
    type Guard = gloo_timers::callback::Interval;

    fn every(&self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> Self::Guard {
        gloo_timers::callback::Interval::new(interval_ms, move || tick())
    }
}
