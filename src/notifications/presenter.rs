// SPDX-License-Identifier: MPL-2.0
//! The seam between the notification manager and the rendering host.
//!
//! The manager never touches rendering directly; it issues opaque display
//! commands through a [`Presenter`] injected at construction time. Any host
//! that can show, style, and remove a small overlay can implement it.

use super::notification::{Notification, NotificationId};

/// Receives display commands for toast notifications.
///
/// Command order for a full lifecycle is `mount`, `reveal`, `conceal`,
/// `remove`. A forced replacement skips straight from `mount` to `remove`
/// with no exit transition.
pub trait Presenter {
    /// Inserts the toast in its pre-visible (off-screen or transparent) state.
    fn mount(&mut self, notification: &Notification);

    /// Transitions the mounted toast to its visible state.
    fn reveal(&mut self, id: NotificationId);

    /// Starts the exit transition.
    fn conceal(&mut self, id: NotificationId);

    /// Removes the toast entirely.
    ///
    /// Must be a no-op if the toast is already absent; the manager relies on
    /// this when dismissal paths overlap.
    fn remove(&mut self, id: NotificationId);
}

/// Presenter that writes display commands to stdout.
///
/// Used by the demo binary; doubles as a reference implementation showing
/// how little a host has to provide.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn mount(&mut self, notification: &Notification) {
        println!(
            "[toast {}] mount ({}): {}",
            notification.id(),
            notification.kind(),
            notification.message()
        );
    }

    fn reveal(&mut self, id: NotificationId) {
        println!("[toast {id}] reveal");
    }

    fn conceal(&mut self, id: NotificationId) {
        println!("[toast {id}] conceal");
    }

    fn remove(&mut self, id: NotificationId) {
        println!("[toast {id}] remove");
    }
}

/// A display command as seen by a [`RecordingPresenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mount(NotificationId),
    Reveal(NotificationId),
    Conceal(NotificationId),
    Remove(NotificationId),
}

/// Presenter that records every command it receives, in order.
///
/// Intended for tests and headless hosts that want to assert on the exact
/// command sequence.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    commands: Vec<Command>,
}

impl RecordingPresenter {
    /// Creates an empty recording presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in the order they were issued.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns how many times `id` was removed.
    #[must_use]
    pub fn removals_of(&self, id: NotificationId) -> usize {
        self.commands
            .iter()
            .filter(|command| **command == Command::Remove(id))
            .count()
    }

    /// Forgets all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn mount(&mut self, notification: &Notification) {
        self.commands.push(Command::Mount(notification.id()));
    }

    fn reveal(&mut self, id: NotificationId) {
        self.commands.push(Command::Reveal(id));
    }

    fn conceal(&mut self, id: NotificationId) {
        self.commands.push(Command::Conceal(id));
    }

    fn remove(&mut self, id: NotificationId) {
        self.commands.push(Command::Remove(id));
    }
}
