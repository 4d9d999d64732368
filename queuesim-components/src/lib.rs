//! Single-server station simulation
//!
//! This crate assembles the core building blocks into a running station:
//! the FIFO waiting line, the Idle/Busy state machine with its event loop,
//! the parallel replication driver and arrival-rate sweeps.
//!
//! # Example
//!
//! ```rust
//! use queuesim_components::run_replications;
//! use queuesim_core::StationConfig;
//!
//! let config = StationConfig::mm1(0.5, 1.0, 10_000);
//! let aggregate = run_replications(&config, 4).unwrap();
//! assert!((aggregate.avg_utilization - 0.5).abs() < 0.05);
//! ```

pub mod queue;
pub mod replication;
pub mod station;
pub mod sweep;

pub use queue::{QueueEntry, WaitingLine};
pub use replication::{run_replications, run_replications_sequential};
pub use station::{run, run_validated, InService, ServerState, SimulationState};
pub use sweep::{sweep_arrival_rates, STUDY_ARRIVAL_RATES};
