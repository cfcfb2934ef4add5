//! Timer-driven reveal task
//!
//! [spawn_reveal] runs one [Revealer] on the tokio runtime, ticking it from an interval timer
//! and publishing each new prefix on a `watch` channel. The task ends on its own after the
//! last character. The returned [RevealHandle] owns the task: cancelling or dropping it
//! aborts the task, after which no further snapshot is published.

use super::revealer::Revealer;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

/// Why a reveal could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    /// The tick interval was zero
    ZeroInterval,
}

impl fmt::Display for RevealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealError::ZeroInterval => write!(f, "reveal tick interval must be non-zero"),
        }
    }
}

impl std::error::Error for RevealError {}

/// Start revealing `text`, one character per `tick_interval`
///
/// The first character appears one interval after the call. Must be called from within a
/// tokio runtime. Nothing is spawned for a zero interval.
pub fn spawn_reveal(
    text: impl Into<String>,
    tick_interval: Duration,
) -> Result<RevealHandle, RevealError> {
    if tick_interval.is_zero() {
        return Err(RevealError::ZeroInterval);
    }
    let mut revealer = Revealer::new(text);
    let (sender, receiver) = watch::channel(String::new());

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !revealer.is_complete() {
            ticker.tick().await;
            let Some(snapshot) = revealer.tick() else {
                break;
            };
            if sender.send(snapshot.to_string()).is_err() {
                trace!("every reveal subscriber dropped, stopping");
                break;
            }
        }
    });

    Ok(RevealHandle { receiver, task })
}

/// Owner of a running reveal task
#[derive(Debug)]
pub struct RevealHandle {
    receiver: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl RevealHandle {
    /// The most recently published prefix
    pub fn snapshot(&self) -> String {
        self.receiver.borrow().clone()
    }

    /// A receiver that is notified on every new prefix
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.receiver.clone()
    }

    /// Whether the task has stopped, by completion or cancellation
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the reveal; nothing is published afterwards
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            trace!("reveal task cancelled");
        }
        self.task.abort();
    }

    /// Wait for the reveal to end and return the last published prefix
    pub async fn finished(mut self) -> String {
        while self.receiver.changed().await.is_ok() {}
        let last = self.receiver.borrow().clone();
        last
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
