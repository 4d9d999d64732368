//! Core building blocks for single-server queueing simulation.
//!
//! This crate provides the pieces a station simulation is assembled from:
//! time management, event scheduling, seeded random streams, variate
//! generators and arrival streams.
//!
//! # Overview
//!
//! - [`Scheduler`]: min-ordered pending events with a monotone clock. Ties at
//!   the same instant pop in insertion order.
//! - [`TimeLaw`]: exponential or two-stage hyperexponential draws.
//! - [`ArrivalStream`]: lazily drawn Poisson arrivals or a pre-generated
//!   renewal horizon.
//! - [`StationConfig`]: station parameters, validated once up front.
//!
//! # Basic Usage
//!
//! ```rust
//! use queuesim_core::{EventKind, Scheduler, SimTime, StationConfig};
//!
//! let validated = StationConfig::mm1(0.5, 1.0, 1_000).validate().unwrap();
//! let mut arrivals = validated.arrival_stream(7);
//!
//! let mut scheduler = Scheduler::new();
//! let first = arrivals.next_arrival().unwrap();
//! scheduler.schedule(first, EventKind::Arrival);
//! let event = scheduler.pop().unwrap();
//! assert!(event.time > SimTime::zero());
//! ```

pub mod arrivals;
pub mod config;
pub mod dists;
pub mod error;
pub mod logging;
pub mod randomness;
pub mod scheduler;
pub mod time;
pub mod types;

pub use arrivals::{ArrivalStream, PoissonArrivals, RenewalArrivals};
pub use config::{ArrivalProcess, ServiceProcess, StationConfig, ValidatedConfig, DEFAULT_SEED};
pub use dists::{exponential, hyperexponential, Exponential, Hyperexponential, TimeLaw};
pub use error::SimError;
pub use logging::{
    init_detailed_simulation_logging, init_simulation_logging, init_simulation_logging_with_level,
    replication_span, sweep_point_span,
};
pub use randomness::{derive_seed, stream_rng, SimRng, Stream};
pub use scheduler::{Event, EventKind, Scheduler};
pub use time::SimTime;
pub use types::EventId;
