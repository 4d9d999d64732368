//! Running statistics of one replication
//!
//! Two independent sources feed a [`ReplicationResult`]:
//!
//! - [`RunningTotals`] integrates the queue-length and busy step functions
//!   over simulated time. The time averages are exact areas divided by `T`.
//! - [`SampleSeries`] keeps one wait, response and service sample per
//!   completed service. Only the confidence half-widths and the per-customer
//!   means come from here.

use queuesim_core::SimTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::result::ReplicationResult;
use crate::stats::Estimate;

/// Upper bound on the sample storage reserved before the first departure.
/// Longer runs grow the series as customers are served.
const RESERVE_LIMIT: usize = 1 << 20;

/// Time-weighted areas, updated on every dispatched event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningTotals {
    area_queue_time: f64,
    area_busy_time: f64,
    last_event_time: SimTime,
    customers_served: u64,
}

impl RunningTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close out the interval `[last_event_time, now]`.
    ///
    /// `queue_len` and `busy` describe the state that held throughout the
    /// interval, i.e. before the event at `now` is applied. Both areas only
    /// ever grow and `last_event_time` never moves backwards.
    pub fn close_interval(&mut self, now: SimTime, queue_len: usize, busy: bool) {
        let dt = now.since(self.last_event_time);
        self.area_queue_time += queue_len as f64 * dt;
        if busy {
            self.area_busy_time += dt;
        }
        self.last_event_time = self.last_event_time.max(now);
    }

    pub fn record_service_completion(&mut self) {
        self.customers_served += 1;
    }

    pub fn area_queue_time(&self) -> f64 {
        self.area_queue_time
    }

    pub fn area_busy_time(&self) -> f64 {
        self.area_busy_time
    }

    pub fn last_event_time(&self) -> SimTime {
        self.last_event_time
    }

    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    /// `(avg_queue_length, avg_utilization)` over `[0, last_event_time]`.
    ///
    /// Both are zero when no simulated time elapsed.
    pub fn time_averages(&self) -> (f64, f64) {
        let horizon = self.last_event_time.as_f64();
        if horizon <= 0.0 {
            warn!("No simulated time elapsed; time averages reported as zero");
            return (0.0, 0.0);
        }
        (
            self.area_queue_time / horizon,
            self.area_busy_time / horizon,
        )
    }
}

/// Per-customer samples, one entry per completed service.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    wait: Vec<f64>,
    response: Vec<f64>,
    service: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            wait: Vec::with_capacity(capacity),
            response: Vec::with_capacity(capacity),
            service: Vec::with_capacity(capacity),
        }
    }

    /// Record a departed customer; response is `wait + service`.
    pub fn record(&mut self, wait: f64, service: f64) {
        self.wait.push(wait);
        self.response.push(wait + service);
        self.service.push(service);
    }

    pub fn len(&self) -> usize {
        self.wait.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wait.is_empty()
    }

    pub fn wait_times(&self) -> &[f64] {
        &self.wait
    }

    pub fn response_times(&self) -> &[f64] {
        &self.response
    }

    pub fn service_times(&self) -> &[f64] {
        &self.service
    }
}

/// Totals and samples of one replication, reduced to a [`ReplicationResult`]
/// when the run ends.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator {
    pub totals: RunningTotals,
    pub samples: SampleSeries,
}

impl StatisticsAccumulator {
    pub fn new(expected_customers: u64) -> Self {
        let reserve = usize::try_from(expected_customers)
            .map_or(RESERVE_LIMIT, |n| n.min(RESERVE_LIMIT));
        Self {
            totals: RunningTotals::new(),
            samples: SampleSeries::with_capacity(reserve),
        }
    }

    /// Count one completed service and store its samples.
    pub fn record_departure(&mut self, wait: f64, service: f64) {
        self.totals.record_service_completion();
        self.samples.record(wait, service);
    }

    pub fn finish(&self, seed: u64, events_processed: u64) -> ReplicationResult {
        let (avg_queue_length, avg_utilization) = self.totals.time_averages();
        let wait = Estimate::from_samples(self.samples.wait_times());
        let response = Estimate::from_samples(self.samples.response_times());
        let service = Estimate::from_samples(self.samples.service_times());

        ReplicationResult {
            seed,
            avg_wait_time: wait.mean,
            wait_time_margin: wait.half_width,
            avg_response_time: response.mean,
            response_time_margin: response.half_width,
            avg_queue_length,
            avg_utilization,
            avg_service_time: service.mean,
            customers_served: self.totals.customers_served(),
            events_processed,
            simulated_time: self.totals.last_event_time().as_f64(),
        }
    }
}
