//! Single-server station state machine and its event loop
//!
//! One [`SimulationState`] owns everything a replication mutates: the
//! scheduler, the arrival stream, the service-time random source, the server
//! and its waiting line, and the statistics accumulator. Nothing is shared,
//! so replications can run on any thread.
//!
//! On every dispatched event the interval since the previous event is closed
//! out first, using the state that held throughout it, and only then is the
//! transition applied:
//!
//! | state | event                   | next  | effect                                  |
//! |-------|-------------------------|-------|-----------------------------------------|
//! | Idle  | Arrival                 | Busy  | start service, wait 0                   |
//! | Busy  | Arrival                 | Busy  | join the line                           |
//! | Busy  | Departure, line waiting | Busy  | record departure, serve oldest in line  |
//! | Busy  | Departure, line empty   | Idle  | record departure                        |

use queuesim_core::{
    ArrivalStream, Event, EventKind, Scheduler, SimError, SimRng, SimTime, StationConfig, TimeLaw,
    ValidatedConfig,
};
use queuesim_metrics::{ReplicationResult, RunningTotals, StatisticsAccumulator};
use rand_distr::Distribution;
use tracing::{debug, error, instrument, trace};

use crate::queue::WaitingLine;

/// The customer currently being served.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InService {
    /// Time the customer spent in the line before service started.
    pub wait: f64,
    /// Drawn service duration.
    pub service: f64,
}

/// Whether the single server is working.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ServerState {
    #[default]
    Idle,
    Busy(InService),
}

impl ServerState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ServerState::Busy(_))
    }
}

/// Complete mutable state of one replication.
pub struct SimulationState {
    scheduler: Scheduler,
    arrivals: Box<dyn ArrivalStream>,
    service_law: TimeLaw,
    service_rng: SimRng,
    server: ServerState,
    line: WaitingLine,
    stats: StatisticsAccumulator,
    target: u64,
    seed: u64,
}

impl SimulationState {
    /// Build the state of one replication and schedule its first arrival.
    pub fn new(validated: &ValidatedConfig, seed: u64) -> Self {
        Self::with_arrival_stream(validated, seed, validated.arrival_stream(seed))
    }

    /// Same as [`SimulationState::new`] but fed by a caller-supplied stream.
    pub fn with_arrival_stream(
        validated: &ValidatedConfig,
        seed: u64,
        arrivals: Box<dyn ArrivalStream>,
    ) -> Self {
        let target = validated.target_customers();
        let mut state = Self {
            scheduler: Scheduler::new(),
            arrivals,
            service_law: *validated.service_law(),
            service_rng: validated.service_rng(seed),
            server: ServerState::Idle,
            line: WaitingLine::new(),
            stats: StatisticsAccumulator::new(target),
            target,
            seed,
        };
        state.schedule_next_arrival();
        state
    }

    /// Pop and dispatch one event.
    ///
    /// # Errors
    ///
    /// `SchedulerExhausted` if no event is pending while customers remain
    /// unserved, `InvariantViolation` if a departure fires with the server
    /// idle.
    pub fn step(&mut self) -> Result<Event, SimError> {
        let event = self
            .scheduler
            .pop()
            .ok_or(SimError::SchedulerExhausted {
                served: self.customers_served(),
                target: self.target,
            })?;
        self.dispatch(event)?;
        Ok(event)
    }

    /// Run until the target number of customers has been served.
    pub fn run_to_completion(mut self) -> Result<ReplicationResult, SimError> {
        while !self.is_complete() {
            self.step()?;
        }
        Ok(self.finish())
    }

    fn dispatch(&mut self, event: Event) -> Result<(), SimError> {
        debug_assert!(
            self.server.is_busy() || self.line.is_empty(),
            "customers waiting while the server is idle"
        );

        self.stats
            .totals
            .close_interval(event.time, self.line.len(), self.server.is_busy());

        trace!(
            time = event.time.as_f64(),
            kind = %event.kind,
            queue_len = self.line.len(),
            busy = self.server.is_busy(),
            "Dispatching event"
        );

        match event.kind {
            EventKind::Arrival => {
                self.on_arrival(event.time);
                Ok(())
            }
            EventKind::Departure => self.on_departure(event.time),
        }
    }

    fn on_arrival(&mut self, now: SimTime) {
        if self.server.is_busy() {
            self.line.push(now);
        } else {
            self.start_service(0.0);
        }
        self.schedule_next_arrival();
    }

    fn on_departure(&mut self, now: SimTime) -> Result<(), SimError> {
        let ServerState::Busy(done) = std::mem::take(&mut self.server) else {
            error!(time = now.as_f64(), "Departure while the server is idle");
            return Err(SimError::InvariantViolation {
                time: now.as_f64(),
                reason: "departure while the server is idle",
            });
        };
        self.stats.record_departure(done.wait, done.service);

        if let Some(next) = self.line.pop() {
            self.start_service(next.wait_until(now));
        }
        Ok(())
    }

    fn start_service(&mut self, wait: f64) {
        let service = self.service_law.sample(&mut self.service_rng);
        self.scheduler.schedule_in(service, EventKind::Departure);
        self.server = ServerState::Busy(InService { wait, service });
    }

    /// Pull the next arrival unless enough customers are already in flight
    /// to reach the target.
    fn schedule_next_arrival(&mut self) {
        if self.in_flight() >= self.target {
            return;
        }
        if let Some(at) = self.arrivals.next_arrival() {
            self.scheduler.schedule(at, EventKind::Arrival);
        }
    }

    fn finish(&self) -> ReplicationResult {
        self.stats.finish(self.seed, self.scheduler.events_processed())
    }

    /// Served, waiting and in-service customers combined.
    pub fn in_flight(&self) -> u64 {
        self.customers_served() + self.line.len() as u64 + u64::from(self.server.is_busy())
    }

    pub fn is_complete(&self) -> bool {
        self.customers_served() >= self.target
    }

    pub fn customers_served(&self) -> u64 {
        self.stats.totals.customers_served()
    }

    pub fn time(&self) -> SimTime {
        self.scheduler.time()
    }

    pub fn server(&self) -> &ServerState {
        &self.server
    }

    pub fn queue_len(&self) -> usize {
        self.line.len()
    }

    pub fn totals(&self) -> &RunningTotals {
        &self.stats.totals
    }

    pub fn arrivals_issued(&self) -> u64 {
        self.arrivals.issued()
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }
}

/// Validate `config` and run one replication seeded with `config.seed`.
///
/// # Errors
///
/// Any validation error, before an event is scheduled, or
/// `SchedulerExhausted` if the event loop runs dry.
pub fn run(config: &StationConfig) -> Result<ReplicationResult, SimError> {
    let validated = config.validate()?;
    run_validated(&validated, config.seed)
}

/// Run one replication of an already validated configuration.
#[instrument(skip(validated), fields(target = validated.target_customers()))]
pub fn run_validated(validated: &ValidatedConfig, seed: u64) -> Result<ReplicationResult, SimError> {
    let result = SimulationState::new(validated, seed).run_to_completion()?;

    debug!(
        avg_wait_time = result.avg_wait_time,
        avg_queue_length = result.avg_queue_length,
        avg_utilization = result.avg_utilization,
        simulated_time = result.simulated_time,
        events = result.events_processed,
        "Replication finished"
    );

    metrics::counter!("queuesim_customers_served_total").increment(result.customers_served);
    metrics::counter!("queuesim_events_processed_total").increment(result.events_processed);
    metrics::gauge!("queuesim_avg_utilization").set(result.avg_utilization);
    metrics::gauge!("queuesim_avg_queue_length").set(result.avg_queue_length);

    Ok(result)
}
