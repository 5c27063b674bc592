// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting session activity.
//!
//! Components hold a cheap, cloneable [`DiagnosticsHandle`] and log events
//! through it without blocking; a [`DiagnosticsCollector`] drains the channel
//! into a memory-bounded circular buffer that the host can inspect. If the
//! channel fills up, events are dropped rather than stalling the caller.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{ActivityEvent, ActivityKind};

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Capacity of the handle-to-collector channel.
const CHANNEL_CAPACITY: usize = 256;

/// Default capacity of the retained-event ring buffer.
const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// Cheap, cloneable handle for logging activity events.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ActivityEvent>,
}

impl DiagnosticsHandle {
    /// Logs an activity event.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log(&self, kind: ActivityKind) {
        let _ = self.event_tx.try_send(ActivityEvent::new(kind));
    }
}

/// Drains logged events into a bounded ring buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<ActivityEvent>,
    buffer: CircularBuffer<ActivityEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with default capacities and its paired handle.
    #[must_use]
    pub fn new() -> (Self, DiagnosticsHandle) {
        Self::with_buffer_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a collector retaining at most `capacity` events.
    #[must_use]
    pub fn with_buffer_capacity(capacity: usize) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        (
            Self {
                event_rx,
                buffer: CircularBuffer::with_capacity(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all queued events into the ring buffer. Non-blocking.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the retained events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.buffer.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events have been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
