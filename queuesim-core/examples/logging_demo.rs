//! Demonstration of the logging helpers in queuesim-core
//!
//! Drives a scheduler by hand with a short Poisson arrival stream and a fixed
//! service time, so every event shows up at TRACE level.
//!
//! ```bash
//! cargo run -p queuesim-core --example logging_demo
//! RUST_LOG=queuesim_core=debug cargo run -p queuesim-core --example logging_demo
//! ```

use queuesim_core::{
    init_detailed_simulation_logging, replication_span, EventKind, Scheduler, SimError, SimTime,
    StationConfig,
};
use tracing::info;

const SERVICE_TIME: f64 = 0.8;

fn main() -> Result<(), SimError> {
    init_detailed_simulation_logging();

    let validated = StationConfig::mm1(1.0, 2.0, 5).validate()?;
    let _span = replication_span(0, 7).entered();

    let mut arrivals = validated.arrival_stream(7);
    let mut scheduler = Scheduler::new();
    let mut busy_until: Option<SimTime> = None;

    for _ in 0..validated.target_customers() {
        if let Some(at) = arrivals.next_arrival() {
            scheduler.schedule(at, EventKind::Arrival);
        }
    }

    while let Some(event) = scheduler.pop() {
        match event.kind {
            EventKind::Arrival => {
                let start = busy_until.map_or(event.time, |t| t.max(event.time));
                let done = start + SERVICE_TIME;
                busy_until = Some(done);
                info!(arrived = event.time.as_f64(), leaves = done.as_f64(), "Customer arrived");
                scheduler.schedule(done, EventKind::Departure);
            }
            EventKind::Departure => {
                info!(time = event.time.as_f64(), "Customer departed");
            }
        }
    }

    info!(
        events = scheduler.events_processed(),
        end = scheduler.time().as_f64(),
        "Demo finished"
    );
    Ok(())
}
