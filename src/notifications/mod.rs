// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. A toast appears temporarily to inform the
//! user about an action (form submitted, validation failed, etc.) without
//! blocking interaction, and only one is ever shown at a time: a newer
//! message replaces the current one outright rather than queuing behind it.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with message kinds
//! - [`manager`] - `Manager` for the single-slot lifecycle
//! - [`presenter`] - The display seam the manager issues commands through
//!
//! # Usage
//!
//! ```
//! use toastbox::notifications::{Kind, Manager, RecordingPresenter};
//!
//! // Create a manager over some presenter
//! let mut manager = Manager::new(RecordingPresenter::new());
//!
//! // Show a toast; drive `manager.tick()` from the host event loop
//! let id = manager.notify("Message sent successfully!", Kind::Success);
//!
//! // The close control dismisses early through the same exit path
//! assert!(manager.dismiss(id));
//! ```
//!
//! # Design Considerations
//!
//! - Lifecycle: mount hidden, reveal after a short delay (~100ms), display
//!   for 5s, then a 300ms exit transition before removal
//! - Single slot: no queue; replacement is immediate and unanimated
//! - Removal is idempotent end to end (manager slot + presenter contract)

mod manager;
mod notification;
mod presenter;

pub use manager::{Manager, Timings};
pub use notification::{Kind, Notification, NotificationId};
pub use presenter::{Command, Presenter, RecordingPresenter, TerminalPresenter};
