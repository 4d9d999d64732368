//! Per-replication and aggregate result records
//!
//! Field names are stable: downstream CSV export and theory comparison key
//! off `avg_wait_time`, `avg_queue_length`, `avg_utilization` and
//! `avg_response_time`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MetricsError;
use crate::stats;

/// Summary of one completed replication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationResult {
    /// Seed the replication's random streams were built from.
    pub seed: u64,
    pub avg_wait_time: f64,
    /// 95% half-width of the per-customer wait samples.
    pub wait_time_margin: f64,
    pub avg_response_time: f64,
    /// 95% half-width of the per-customer response samples.
    pub response_time_margin: f64,
    pub avg_queue_length: f64,
    pub avg_utilization: f64,
    pub avg_service_time: f64,
    pub customers_served: u64,
    pub events_processed: u64,
    /// Final event time `T`, the denominator of the time averages.
    pub simulated_time: f64,
}

/// 95% half-widths of the four headline metrics across replications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplicationSpread {
    pub avg_wait_time: f64,
    pub avg_queue_length: f64,
    pub avg_utilization: f64,
    pub avg_response_time: f64,
}

/// Arithmetic mean of every metric over a set of replications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub replications: usize,
    pub avg_wait_time: f64,
    /// Mean of the per-replication wait margins.
    pub wait_time_margin: f64,
    pub avg_response_time: f64,
    /// Mean of the per-replication response margins.
    pub response_time_margin: f64,
    pub avg_queue_length: f64,
    pub avg_utilization: f64,
    pub avg_service_time: f64,
    pub across_replications: ReplicationSpread,
    pub per_replication: Vec<ReplicationResult>,
}

impl AggregateResult {
    /// Reduce replication results in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Empty`] when `results` is empty.
    pub fn from_replications(results: Vec<ReplicationResult>) -> Result<Self, MetricsError> {
        if results.is_empty() {
            return Err(MetricsError::Empty);
        }

        let wait = column(&results, |r| r.avg_wait_time);
        let response = column(&results, |r| r.avg_response_time);
        let queue = column(&results, |r| r.avg_queue_length);
        let utilization = column(&results, |r| r.avg_utilization);
        let wait_margin = stats::mean(&column(&results, |r| r.wait_time_margin));
        let response_margin = stats::mean(&column(&results, |r| r.response_time_margin));
        let service = stats::mean(&column(&results, |r| r.avg_service_time));

        let aggregate = Self {
            replications: results.len(),
            avg_wait_time: stats::mean(&wait),
            wait_time_margin: wait_margin,
            avg_response_time: stats::mean(&response),
            response_time_margin: response_margin,
            avg_queue_length: stats::mean(&queue),
            avg_utilization: stats::mean(&utilization),
            avg_service_time: service,
            across_replications: ReplicationSpread {
                avg_wait_time: stats::confidence_half_width(&wait),
                avg_queue_length: stats::confidence_half_width(&queue),
                avg_utilization: stats::confidence_half_width(&utilization),
                avg_response_time: stats::confidence_half_width(&response),
            },
            per_replication: results,
        };

        debug!(
            replications = aggregate.replications,
            avg_wait_time = aggregate.avg_wait_time,
            avg_utilization = aggregate.avg_utilization,
            "Replications reduced"
        );
        Ok(aggregate)
    }

    /// Total customers served over all replications
    pub fn customers_served(&self) -> u64 {
        self.per_replication.iter().map(|r| r.customers_served).sum()
    }
}

fn column(results: &[ReplicationResult], f: fn(&ReplicationResult) -> f64) -> Vec<f64> {
    results.iter().map(f).collect()
}

/// One arrival rate of a sweep with its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub lambda: f64,
    pub result: AggregateResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replication(seed: u64, wait: f64, utilization: f64) -> ReplicationResult {
        ReplicationResult {
            seed,
            avg_wait_time: wait,
            wait_time_margin: 0.1,
            avg_response_time: wait + 1.0,
            response_time_margin: 0.2,
            avg_queue_length: wait / 2.0,
            avg_utilization: utilization,
            avg_service_time: 1.0,
            customers_served: 100,
            events_processed: 200,
            simulated_time: 200.0,
        }
    }

    #[test]
    fn test_reduce_is_arithmetic_mean() {
        let agg = AggregateResult::from_replications(vec![
            replication(1, 1.0, 0.4),
            replication(2, 3.0, 0.6),
        ])
        .unwrap();

        assert_eq!(agg.replications, 2);
        assert_eq!(agg.avg_wait_time, 2.0);
        assert_eq!(agg.avg_response_time, 3.0);
        assert_eq!(agg.avg_queue_length, 1.0);
        assert!((agg.avg_utilization - 0.5).abs() < 1e-12);
        assert!((agg.wait_time_margin - 0.1).abs() < 1e-12);
        assert_eq!(agg.customers_served(), 200);
        assert!(agg.across_replications.avg_wait_time > 0.0);
        assert_eq!(agg.per_replication[0].seed, 1);
    }

    #[test]
    fn test_single_replication_has_no_spread() {
        let agg = AggregateResult::from_replications(vec![replication(1, 1.0, 0.5)]).unwrap();
        assert_eq!(agg.across_replications, ReplicationSpread::default());
        assert_eq!(agg.avg_wait_time, 1.0);
    }

    #[test]
    fn test_empty_reduction_fails() {
        assert!(matches!(
            AggregateResult::from_replications(Vec::new()),
            Err(MetricsError::Empty)
        ));
    }

    #[test]
    fn test_stable_field_names() {
        let value = serde_json::to_value(replication(1, 1.0, 0.5)).unwrap();
        for key in [
            "avg_wait_time",
            "avg_queue_length",
            "avg_utilization",
            "avg_response_time",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
