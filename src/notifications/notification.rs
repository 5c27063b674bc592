// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;
use tokio::time::Instant;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a notification, for visual styling by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Neutral informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Something went wrong and needs the user's attention.
    Error,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Error => "error",
        };
        f.write_str(name)
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Kind::Info),
            "success" => Ok(Kind::Success),
            "error" => Ok(Kind::Error),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// A transient message to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Kind (determines presenter styling).
    kind: Kind,
    /// The message text.
    message: String,
    /// When this notification transitioned to its visible state.
    /// `None` while still entering.
    visible_since: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            visible_since: None,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification became visible, if it has.
    #[must_use]
    pub fn visible_since(&self) -> Option<Instant> {
        self.visible_since
    }

    /// Records the moment the presenter revealed this notification.
    pub(crate) fn mark_visible(&mut self, now: Instant) {
        self.visible_since = Some(now);
    }
}

impl From<ValidationError> for Notification {
    fn from(err: ValidationError) -> Self {
        Notification::error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn not_visible_until_marked() {
        let mut notification = Notification::success("saved");
        assert!(notification.visible_since().is_none());

        let now = Instant::now();
        notification.mark_visible(now);
        assert_eq!(notification.visible_since(), Some(now));
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [Kind::Info, Kind::Success, Kind::Error] {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
        assert!("warning".parse::<Kind>().is_err());
    }

    #[test]
    fn validation_error_becomes_error_notification() {
        let notification: Notification = ValidationError::InvalidEmail.into();
        assert_eq!(notification.kind(), Kind::Error);
        assert_eq!(notification.message(), "Please enter a valid email address");
    }
}
