//! Statistics, results and export for queueing simulation
//!
//! This crate turns the state trajectory of a station run into the numbers
//! outer tooling consumes: time-average integrals, per-customer sample
//! means with 95% half-widths, replication reductions, closed-form reference
//! values and flat-record CSV/JSON export.

pub mod accumulator;
pub mod error;
pub mod export;
pub mod result;
pub mod stats;
pub mod theory;

pub use accumulator::{RunningTotals, SampleSeries, StatisticsAccumulator};
pub use error::MetricsError;
pub use result::{AggregateResult, ReplicationResult, ReplicationSpread, SweepPoint};
pub use stats::{confidence_half_width, Estimate, Z_95};
pub use theory::TheoreticalMetrics;
