//! # queuesim - single-server queueing simulation
//!
//! Discrete-event simulation of M/M/1, M/G/1 and G/M/1 stations with
//! reproducible, parallel replications.
//!
//! ## Feature Flags
//!
//! - `default`: Includes `components` and `metrics`
//! - `components`: Station state machine, replication driver and sweeps
//! - `metrics`: Result records, reference formulas and CSV/JSON export
//!
//! ## Example
//!
//! ```rust
//! use queuesim::prelude::*;
//!
//! let config = StationConfig::mm1(0.5, 1.0, 10_000).with_seed(1);
//! let aggregate = run_replications(&config, 3).unwrap();
//! let expected = queuesim::metrics::theory::mm1(0.5, 1.0).unwrap();
//! assert!((aggregate.avg_utilization - expected.avg_utilization).abs() < 0.05);
//! ```

pub use queuesim_core as core;

#[cfg(feature = "components")]
pub use queuesim_components as components;

#[cfg(feature = "metrics")]
pub use queuesim_metrics as metrics;

pub mod prelude {
    //! Commonly used types and functions

    pub use queuesim_core::{
        init_simulation_logging, ArrivalProcess, ServiceProcess, SimError, SimTime, StationConfig,
    };

    #[cfg(feature = "components")]
    pub use queuesim_components::{
        run, run_replications, run_replications_sequential, sweep_arrival_rates,
        STUDY_ARRIVAL_RATES,
    };

    #[cfg(feature = "metrics")]
    pub use queuesim_metrics::{AggregateResult, ReplicationResult, SweepPoint, TheoreticalMetrics};
}
