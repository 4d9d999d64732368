//! Replication driver
//!
//! Replication `i` of a configuration is seeded with
//! `derive_seed(config.seed, i)`. Results are collected in index order and
//! reduced sequentially, so the aggregate does not depend on how rayon
//! schedules the workers.

use queuesim_core::{derive_seed, replication_span, SimError, StationConfig, ValidatedConfig};
use queuesim_metrics::{AggregateResult, ReplicationResult};
use rayon::prelude::*;
use tracing::info;

use crate::station::run_validated;

fn check_replications(replications: usize) -> Result<(), SimError> {
    if replications == 0 {
        return Err(SimError::Configuration(
            "replications must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn run_indexed(validated: &ValidatedConfig, index: usize) -> Result<ReplicationResult, SimError> {
    let seed = derive_seed(validated.config().seed, index as u64);
    let _span = replication_span(index, seed).entered();
    run_validated(validated, seed)
}

/// Run `replications` independent replications in parallel and average them.
///
/// # Errors
///
/// Configuration errors are reported before any replication starts. A
/// replication that fails aborts the whole aggregate; there is no retry.
pub fn run_replications(
    config: &StationConfig,
    replications: usize,
) -> Result<AggregateResult, SimError> {
    check_replications(replications)?;
    let validated = config.validate()?;

    info!(
        replications,
        arrival_rate = config.arrival_rate(),
        service_rate = config.service_rate(),
        target_customers = config.target_customers,
        "Starting replications"
    );

    let results = (0..replications)
        .into_par_iter()
        .map(|index| run_indexed(&validated, index))
        .collect::<Result<Vec<_>, _>>()?;

    finish(results)
}

/// Like [`run_replications`] but on the calling thread only.
pub fn run_replications_sequential(
    config: &StationConfig,
    replications: usize,
) -> Result<AggregateResult, SimError> {
    check_replications(replications)?;
    let validated = config.validate()?;

    let results = (0..replications)
        .map(|index| run_indexed(&validated, index))
        .collect::<Result<Vec<_>, _>>()?;

    finish(results)
}

fn finish(results: Vec<ReplicationResult>) -> Result<AggregateResult, SimError> {
    let aggregate = AggregateResult::from_replications(results)?;
    info!(
        replications = aggregate.replications,
        avg_wait_time = aggregate.avg_wait_time,
        avg_queue_length = aggregate.avg_queue_length,
        avg_utilization = aggregate.avg_utilization,
        avg_response_time = aggregate.avg_response_time,
        "Replications complete"
    );
    Ok(aggregate)
}
