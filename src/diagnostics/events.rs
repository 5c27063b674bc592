// SPDX-License-Identifier: MPL-2.0
//! Activity event types captured during a session.
//!
//! Events describe what the feedback layer did (toasts shown, dismissed,
//! replaced) and what user input failed validation, so a host can inspect
//! recent activity when investigating a report.

use crate::notifications::Kind;
use tokio::time::Instant;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    /// A toast was mounted for display.
    NotificationShown {
        kind: Kind,
        message: String,
    },
    /// A toast was dismissed early by explicit user action.
    NotificationDismissed,
    /// A toast reached the end of its display duration and began its exit.
    NotificationExpired,
    /// A toast was evicted because a newer one replaced it.
    NotificationReplaced,
    /// A form submission failed validation.
    ValidationFailed {
        reason: String,
    },
    /// A debounced action fired after its quiet period.
    DebounceFired,
}

/// A single captured event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    /// When the event was captured.
    pub at: Instant,
    /// What the event was.
    pub kind: ActivityKind,
}

impl ActivityEvent {
    /// Captures `kind` with the current time.
    #[must_use]
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
