// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns a single toast slot and drives it through the phases
//! `Entering -> Visible -> Exiting` before removal. It issues display
//! commands through the injected [`Presenter`] and never renders anything
//! itself.
//!
//! At most one toast is ever live: a new `notify` evicts the current
//! occupant immediately, whatever phase it is in. Because both the
//! auto-dismiss path and explicit dismissal mutate the one slot inside a
//! single-threaded turn, removal cannot run twice for the same toast; the
//! presenter's idempotent `remove` covers hosts where stray removal attempts
//! can still surface.

use super::notification::{Kind, Notification, NotificationId};
use super::presenter::Presenter;
use crate::diagnostics::{ActivityKind, DiagnosticsHandle};
use std::time::Duration;
use tokio::time::Instant;

/// Phase timings for the toast lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between mounting and revealing. Lets the insertion render
    /// before its entry transition starts.
    pub enter_delay: Duration,
    /// How long the toast stays fully visible.
    pub display: Duration,
    /// Duration of the exit transition before removal.
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(100),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Where the slotted toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Mounted but not yet revealed.
    Entering,
    /// Fully visible, counting toward auto-dismiss.
    Visible,
    /// Exit transition running, counting toward removal.
    Exiting,
}

#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    phase: Phase,
    phase_since: Instant,
}

/// Manages the single live toast and its lifecycle.
#[derive(Debug)]
pub struct Manager<P> {
    /// Injected display backend.
    presenter: P,
    /// The at-most-one live toast.
    slot: Option<ActiveToast>,
    timings: Timings,
    /// Optional diagnostics handle for logging activity.
    diagnostics: Option<DiagnosticsHandle>,
}

impl<P: Presenter> Manager<P> {
    /// Creates a manager with default timings.
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self::with_timings(presenter, Timings::default())
    }

    /// Creates a manager with explicit timings.
    #[must_use]
    pub fn with_timings(presenter: P, timings: Timings) -> Self {
        Self {
            presenter,
            slot: None,
            timings,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging activity events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a new toast, evicting any current one.
    ///
    /// The eviction is immediate and unconditional, with no exit animation,
    /// whatever phase the occupant was in. The new toast is mounted
    /// pre-visible and revealed once the enter delay elapses.
    ///
    /// Returns the new toast's ID, usable with [`dismiss`](Self::dismiss).
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        if let Some(evicted) = self.slot.take() {
            self.presenter.remove(evicted.notification.id());
            self.log(ActivityKind::NotificationReplaced);
        }

        let notification = Notification::new(kind, message);
        let id = notification.id();
        self.log(ActivityKind::NotificationShown {
            kind,
            message: notification.message().to_owned(),
        });
        self.presenter.mount(&notification);
        self.slot = Some(ActiveToast {
            notification,
            phase: Phase::Entering,
            phase_since: Instant::now(),
        });
        id
    }

    /// Dismisses the live toast early, routing through the normal exit path.
    ///
    /// Returns `true` if the toast was found and its exit started. A toast
    /// already exiting, or an ID that is not the current occupant, is left
    /// alone and `false` is returned.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let eligible = matches!(
            &self.slot,
            Some(active) if active.notification.id() == id && active.phase != Phase::Exiting
        );
        if !eligible {
            return false;
        }

        let now = Instant::now();
        if let Some(active) = &mut self.slot {
            active.phase = Phase::Exiting;
            active.phase_since = now;
        }
        self.presenter.conceal(id);
        self.log(ActivityKind::NotificationDismissed);
        true
    }

    /// Advances the lifecycle, issuing at most one phase transition.
    ///
    /// Should be called periodically by the host event loop (every
    /// 10-100ms is plenty for the default timings).
    pub fn tick(&mut self) {
        let now = Instant::now();
        let Some((id, phase, elapsed)) = self.slot.as_ref().map(|active| {
            (
                active.notification.id(),
                active.phase,
                now.duration_since(active.phase_since),
            )
        }) else {
            return;
        };

        match phase {
            Phase::Entering if elapsed >= self.timings.enter_delay => {
                if let Some(active) = &mut self.slot {
                    active.phase = Phase::Visible;
                    active.phase_since = now;
                    active.notification.mark_visible(now);
                }
                self.presenter.reveal(id);
            }
            Phase::Visible if elapsed >= self.timings.display => {
                if let Some(active) = &mut self.slot {
                    active.phase = Phase::Exiting;
                    active.phase_since = now;
                }
                self.presenter.conceal(id);
                self.log(ActivityKind::NotificationExpired);
            }
            Phase::Exiting if elapsed >= self.timings.exit => {
                self.slot = None;
                self.presenter.remove(id);
            }
            _ => {}
        }
    }

    /// Returns the live toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref().map(|active| &active.notification)
    }

    /// Returns whether a toast currently occupies the slot.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns the configured timings.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Returns the injected presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn log(&self, kind: ActivityKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::notifications::presenter::{Command, RecordingPresenter};
    use tokio::time;

    // All tests use start_paused so Instant::now() is deterministic
    // and time::advance() controls the clock.

    fn manager() -> Manager<RecordingPresenter> {
        Manager::new(RecordingPresenter::new())
    }

    fn default_timings() -> Timings {
        Timings::default()
    }

    #[tokio::test(start_paused = true)]
    async fn new_manager_shows_nothing() {
        let manager = manager();
        assert!(!manager.is_showing());
        assert!(manager.current().is_none());
        assert!(manager.presenter().commands().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn notify_mounts_pre_visible() {
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        assert_eq!(manager.presenter().commands(), [Command::Mount(id)]);
        let current = manager.current().expect("toast should be live");
        assert!(current.visible_since().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_waits_for_enter_delay() {
        let timings = default_timings();
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        time::advance(timings.enter_delay - Duration::from_millis(1)).await;
        manager.tick();
        assert_eq!(manager.presenter().commands(), [Command::Mount(id)]);

        time::advance(Duration::from_millis(1)).await;
        manager.tick();
        assert_eq!(
            manager.presenter().commands(),
            [Command::Mount(id), Command::Reveal(id)]
        );
        assert!(manager.current().unwrap().visible_since().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn full_lifecycle_runs_mount_reveal_conceal_remove() {
        let timings = default_timings();
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        time::advance(timings.enter_delay).await;
        manager.tick();
        time::advance(timings.display).await;
        manager.tick();
        time::advance(timings.exit).await;
        manager.tick();

        assert_eq!(
            manager.presenter().commands(),
            [
                Command::Mount(id),
                Command::Reveal(id),
                Command::Conceal(id),
                Command::Remove(id),
            ]
        );
        assert!(!manager.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn second_notify_evicts_first_without_exit_animation() {
        let mut manager = manager();
        let first = manager.notify("one", Kind::Info);
        let second = manager.notify("two", Kind::Info);

        assert_eq!(
            manager.presenter().commands(),
            [
                Command::Mount(first),
                Command::Remove(first),
                Command::Mount(second),
            ]
        );
        assert_eq!(manager.current().unwrap().id(), second);
        assert_eq!(manager.presenter().removals_of(first), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn notify_during_exit_does_not_double_remove() {
        let timings = default_timings();
        let mut manager = manager();
        let first = manager.notify("one", Kind::Info);

        time::advance(timings.enter_delay).await;
        manager.tick();
        time::advance(timings.display).await;
        manager.tick(); // first is now exiting

        let second = manager.notify("two", Kind::Info);
        time::advance(timings.exit * 2).await;
        manager.tick();

        assert_eq!(manager.presenter().removals_of(first), 1);
        assert_eq!(manager.current().unwrap().id(), second);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_routes_through_exit_path() {
        let timings = default_timings();
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        time::advance(timings.enter_delay).await;
        manager.tick();

        assert!(manager.dismiss(id));
        time::advance(timings.exit).await;
        manager.tick();

        assert_eq!(
            manager.presenter().commands(),
            [
                Command::Mount(id),
                Command::Reveal(id),
                Command::Conceal(id),
                Command::Remove(id),
            ]
        );
        assert!(!manager.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_while_exiting_is_a_noop() {
        let timings = default_timings();
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        time::advance(timings.enter_delay).await;
        manager.tick();
        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));

        time::advance(timings.exit).await;
        manager.tick();
        assert_eq!(manager.presenter().removals_of(id), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_unknown_id_returns_false() {
        let mut manager = manager();
        manager.notify("saved", Kind::Success);
        let stranger = Notification::info("elsewhere").id();

        assert!(!manager.dismiss(stranger));
        assert!(manager.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_tick_after_early_dismissal_does_not_remove_twice() {
        let timings = default_timings();
        let mut manager = manager();
        let id = manager.notify("saved", Kind::Success);

        time::advance(timings.enter_delay).await;
        manager.tick();
        manager.dismiss(id);
        time::advance(timings.exit).await;
        manager.tick(); // removed here

        // The moment the auto-dismiss would have fired.
        time::advance(timings.display).await;
        manager.tick();
        manager.tick();

        assert_eq!(manager.presenter().removals_of(id), 1);
        assert!(!manager.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_timings_are_honored() {
        let timings = Timings {
            enter_delay: Duration::from_millis(10),
            display: Duration::from_millis(50),
            exit: Duration::from_millis(20),
        };
        let mut manager = Manager::with_timings(RecordingPresenter::new(), timings);
        let id = manager.notify("quick", Kind::Info);

        time::advance(Duration::from_millis(10)).await;
        manager.tick();
        time::advance(Duration::from_millis(50)).await;
        manager.tick();
        time::advance(Duration::from_millis(20)).await;
        manager.tick();

        assert_eq!(manager.presenter().removals_of(id), 1);
        assert!(!manager.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn manager_logs_activity_when_diagnostics_attached() {
        let (mut collector, handle) = DiagnosticsCollector::new();
        let timings = default_timings();
        let mut manager = manager();
        manager.set_diagnostics(handle);

        manager.notify("one", Kind::Info);
        manager.notify("two", Kind::Error);
        time::advance(timings.enter_delay).await;
        manager.tick();
        time::advance(timings.display).await;
        manager.tick();

        collector.drain();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::NotificationShown {
                    kind: Kind::Info,
                    message: "one".to_string(),
                },
                ActivityKind::NotificationReplaced,
                ActivityKind::NotificationShown {
                    kind: Kind::Error,
                    message: "two".to_string(),
                },
                ActivityKind::NotificationExpired,
            ]
        );
    }
}
