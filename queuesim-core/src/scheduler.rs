use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::time::SimTime;
use crate::types::EventId;

/// Kind of a station event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival => write!(f, "arrival"),
            EventKind::Departure => write!(f, "departure"),
        }
    }
}

/// A pending event: when it fires and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub time: SimTime,
    pub kind: EventKind,
}

/// Entry type stored in the scheduler's priority queue.
///
/// Ordered by time, then by insertion sequence, so two events at the exact
/// same instant always pop in the order they were scheduled.
#[derive(Debug)]
struct EventEntry {
    event: Event,
}

impl PartialEq for EventEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventEntry {}

impl PartialOrd for EventEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering for min-heap behavior in BinaryHeap
        other
            .event
            .time
            .cmp(&self.event.time)
            .then_with(|| other.event.id.cmp(&self.event.id))
    }
}

/// Scheduler keeps the current time and the upcoming events.
///
/// `schedule` and `pop` are `O(log n)`. Popping an event moves the clock to the
/// event's timestamp; the clock never moves backwards.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_event_id: u64,
    events: BinaryHeap<EventEntry>,
    clock: SimTime,
    processed: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an event of `kind` at absolute time `time`.
    ///
    /// Events are never scheduled before the current clock; a past timestamp is
    /// raised to the current time.
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> EventId {
        debug_assert!(time >= self.clock, "event scheduled in the past");
        self.next_event_id += 1;
        let id = EventId(self.next_event_id);
        let time = time.max(self.clock);
        trace!(event_id = %id, %kind, time = time.as_f64(), "Event scheduled");
        self.events.push(EventEntry {
            event: Event { id, time, kind },
        });
        id
    }

    /// Schedules an event of `kind` at `self.time() + delay`.
    pub fn schedule_in(&mut self, delay: f64, kind: EventKind) -> EventId {
        self.schedule(self.clock + delay, kind)
    }

    /// Returns the current simulation time.
    #[must_use]
    pub fn time(&self) -> SimTime {
        self.clock
    }

    /// Returns the time of the next scheduled event or `None` if none are left.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.events.peek().map(|entry| entry.event.time)
    }

    /// Removes and returns the next scheduled event or `None` if none are left.
    pub fn pop(&mut self) -> Option<Event> {
        let entry = self.events.pop()?;
        self.clock = entry.event.time;
        self.processed += 1;
        Some(entry.event)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events popped so far
    pub fn events_processed(&self) -> u64 {
        self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t: f64) -> SimTime {
        SimTime::new(t).unwrap()
    }

    #[test]
    fn test_pop_in_time_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(at(3.0), EventKind::Departure);
        scheduler.schedule(at(1.0), EventKind::Arrival);
        scheduler.schedule(at(2.0), EventKind::Arrival);
        assert_eq!(scheduler.len(), 3);
        assert_eq!(scheduler.peek_time(), Some(at(1.0)));

        let times: Vec<f64> = std::iter::from_fn(|| scheduler.pop())
            .map(|e| e.time.as_f64())
            .collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.events_processed(), 3);
    }

    #[test]
    fn test_clock_follows_popped_events() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.time(), SimTime::zero());
        scheduler.schedule(at(5.0), EventKind::Arrival);
        let event = scheduler.pop().unwrap();
        assert_eq!(event.kind, EventKind::Arrival);
        assert_eq!(scheduler.time(), at(5.0));

        scheduler.schedule_in(2.5, EventKind::Departure);
        assert_eq!(scheduler.pop().unwrap().time, at(7.5));
        assert_eq!(scheduler.time(), at(7.5));
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule(at(1.0), EventKind::Departure);
        let second = scheduler.schedule(at(1.0), EventKind::Arrival);
        let third = scheduler.schedule(at(1.0), EventKind::Departure);

        assert_eq!(scheduler.pop().unwrap().id, first);
        assert_eq!(scheduler.pop().unwrap().id, second);
        assert_eq!(scheduler.pop().unwrap().id, third);
    }

    #[test]
    fn test_empty_scheduler() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.pop().is_none());
        assert!(scheduler.peek_time().is_none());
        assert_eq!(scheduler.events_processed(), 0);
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Arrival.to_string(), "arrival");
        assert_eq!(EventKind::Departure.to_string(), "departure");
    }
}
