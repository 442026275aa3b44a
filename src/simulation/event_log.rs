//! Bounded history of what happened to the flock, newest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// One line of the event history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Simulation tick the event was recorded at.
    pub tick: u64,
    /// Text shown in the events panel.
    pub description: String,
    /// What kind of change this was.
    pub kind: EventKind,
}

/// Kinds of flock changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Boids were added.
    Spawn,
    /// Boids were erased or evicted.
    Erase,
    /// Boids ran out of life span.
    Death,
    /// Boids were selected.
    Select,
    /// Pause, mode or spawn color changed.
    Control,
}

impl EventKind {
    /// RGB used when listing events of this kind.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            EventKind::Spawn => (100, 255, 100),
            EventKind::Erase => (255, 100, 100),
            EventKind::Death => (150, 150, 150),
            EventKind::Select => (100, 200, 255),
            EventKind::Control => (255, 200, 100),
        }
    }
}

/// Ring of the most recent events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an event, dropping the oldest once over capacity.
    pub fn log(&mut self, tick: u64, description: impl Into<String>, kind: EventKind) {
        self.entries.push_front(LoggedEvent {
            tick,
            description: description.into(),
            kind,
        });
        self.entries.truncate(self.capacity);
    }

    /// Events, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.entries
    }

    /// The most recent event.
    pub fn latest(&self) -> Option<&LoggedEvent> {
        self.entries.front()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been logged since the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
