// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing for bursty event sources.
//!
//! Window resizing, scroll tracking, and similar sources can fire dozens of
//! times per second. A [`Debouncer`] collapses such a burst into a single
//! execution: each trigger cancels the previously scheduled run and schedules
//! a new one, so the wrapped action only fires after the source has been
//! quiet for the configured period. The closure passed to the latest trigger
//! wins, which is how "latest arguments" semantics are expressed.
//!
//! Scheduling uses the tokio timer wheel; a current-thread runtime is enough.
//! The debouncer is fire-and-forget: nothing propagates back from the action,
//! and a panicking action surfaces on its spawned task rather than being
//! caught here.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Collapses bursts of triggers into one trailing execution.
///
/// Holds at most one pending execution at a time. Dropping the debouncer
/// does not cancel a pending execution; call [`cancel`](Self::cancel) first
/// if that matters.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Schedules `action` to run once the quiet period elapses with no
    /// further triggers. Any previously scheduled-but-unfired action is
    /// cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(quiet).await;
            action();
        }));
    }

    /// Cancels the pending execution, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns whether an execution is scheduled and has not yet fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}
