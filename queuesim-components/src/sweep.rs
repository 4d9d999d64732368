//! Arrival-rate sweeps over a template configuration.

use queuesim_core::{sweep_point_span, SimError, StationConfig};
use queuesim_metrics::SweepPoint;
use tracing::info;

use crate::replication::run_replications;

/// Arrival rates of the standard study, for a service rate of 1.
pub const STUDY_ARRIVAL_RATES: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Run `replications` replications at every rate in `rates`.
///
/// Every rate is validated before the first replication starts. Renewal
/// arrivals keep the template's coefficient of variation.
pub fn sweep_arrival_rates(
    template: &StationConfig,
    rates: &[f64],
    replications: usize,
) -> Result<Vec<SweepPoint>, SimError> {
    if rates.is_empty() {
        return Err(SimError::Configuration(
            "sweep needs at least one arrival rate".to_string(),
        ));
    }

    let configs = rates
        .iter()
        .map(|&lambda| {
            let config = template.with_arrival_rate(lambda);
            config.validate().map(|_| (lambda, config))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(points = configs.len(), replications, "Starting arrival-rate sweep");

    configs
        .into_iter()
        .map(|(lambda, config)| -> Result<SweepPoint, SimError> {
            let _span = sweep_point_span(lambda).entered();
            let result = run_replications(&config, replications)?;
            Ok(SweepPoint { lambda, result })
        })
        .collect()
}
