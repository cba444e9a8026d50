//! Search-as-you-type debouncing.
//!
//! At most one pending value exists. Each new event replaces it and restarts
//! the quiet period; the value fires once the period elapses with no further
//! events. There is no maximum wait.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

/// Single-slot pending value with a deadline.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the timer from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(at) if at <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Takes the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

/// Drives a [`Debouncer`] from a channel, calling `fire` for each settled value.
///
/// When the sender side closes, any pending value fires immediately. Returns
/// the number of times `fire` ran.
pub async fn run_debounced<T, F>(mut rx: mpsc::Receiver<T>, delay: Duration, mut fire: F) -> usize
where
    F: FnMut(T),
{
    let mut debouncer = Debouncer::new(delay);
    let mut fired = 0;
    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            event = rx.recv() => match event {
                Some(value) => debouncer.push(value, Instant::now()),
                None => {
                    if let Some(value) = debouncer.flush() {
                        fire(value);
                        fired += 1;
                    }
                    break;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(value) = debouncer.take_due(Instant::now()) {
                    fire(value);
                    fired += 1;
                }
            }
        }
    }
    tracing::debug!(fired, "debounced input closed");
    fired
}
