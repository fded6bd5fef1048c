//! Cancellable one-shot timer, used to coalesce bursts of search input.
//!
//! `Debouncer::schedule` arms a timer and returns a handle; scheduling again
//! cancels the pending callback, so only the last call in a burst runs. The
//! window length is policy, not correctness: callers and tests should only
//! rely on the final state after the window has elapsed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a scheduled callback. Cancelling after the callback has started
/// running has no effect.
#[derive(Debug, Clone)]
pub struct DebounceHandle {
    cancelled: Arc<AtomicBool>,
}

impl DebounceHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub struct Debouncer {
    delay: Duration,
    pending: Option<(DebounceHandle, JoinHandle<()>)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arms the timer: after the delay elapses, `callback` runs unless a
    /// newer `schedule` call (or an explicit `cancel`) superseded it first.
    pub fn schedule<F>(&mut self, callback: F) -> DebounceHandle
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel_pending();

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let delay = self.delay;
        let worker = thread::spawn(move || {
            thread::sleep(delay);
            if !flag.load(Ordering::SeqCst) {
                callback();
            }
        });

        let handle = DebounceHandle { cancelled };
        self.pending = Some((handle.clone(), worker));
        handle
    }

    /// Cancels the pending callback, if any. The timer thread is left to
    /// wake up, observe the flag, and exit.
    pub fn cancel_pending(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            handle.cancel();
        }
    }

    /// Blocks until the pending timer has fired or observed cancellation.
    pub fn settle(&mut self) {
        if let Some((_, worker)) = self.pending.take() {
            let _ = worker.join();
        }
    }
}
