//! FIFO waiting line of the station
//!
//! The line holds the arrival instants of customers that found the server
//! busy. A customer leaves the line when the server takes it into service, at
//! which point its arrival instant becomes a wait-time sample.

use queuesim_core::SimTime;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A waiting customer, identified by its arrival instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub arrived_at: SimTime,
}

impl QueueEntry {
    pub fn new(arrived_at: SimTime) -> Self {
        Self { arrived_at }
    }

    /// Time spent waiting if service starts at `now`
    pub fn wait_until(&self, now: SimTime) -> f64 {
        now.since(self.arrived_at)
    }
}

/// Unbounded first-in-first-out line.
///
/// # Examples
///
/// ```
/// use queuesim_components::queue::WaitingLine;
/// use queuesim_core::SimTime;
///
/// let mut line = WaitingLine::new();
/// line.push(SimTime::new(1.0).unwrap());
/// line.push(SimTime::new(2.0).unwrap());
/// assert_eq!(line.len(), 2);
/// assert_eq!(line.pop().unwrap().arrived_at, SimTime::new(1.0).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WaitingLine {
    entries: VecDeque<QueueEntry>,
}

impl WaitingLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arrived_at: SimTime) {
        self.entries.push_back(QueueEntry::new(arrived_at));
    }

    /// Remove the oldest waiting customer
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
