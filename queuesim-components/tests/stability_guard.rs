//! Configuration errors are reported before any event is scheduled.

use queuesim_components::{run, run_replications, sweep_arrival_rates};
use queuesim_core::{ArrivalProcess, ServiceProcess, SimError, StationConfig};

#[test]
fn unstable_configurations_rejected() {
    for (lambda, mu) in [(1.0, 1.0), (1.5, 1.0), (2.0, 0.5)] {
        let config = StationConfig::mm1(lambda, mu, 1_000);
        assert!(matches!(run(&config), Err(SimError::UnstableSystem { .. })));
        assert!(matches!(
            run_replications(&config, 3),
            Err(SimError::UnstableSystem { .. })
        ));
    }

    let err = run(&StationConfig::gm1_hyperexponential(1.0, 1.0, 1_000)).unwrap_err();
    assert_eq!(
        err,
        SimError::UnstableSystem {
            arrival_rate: 1.0,
            service_rate: 1.0
        }
    );
}

#[test]
fn invalid_laws_rejected() {
    let degenerate = StationConfig::new(
        ArrivalProcess::Poisson { rate: 0.5 },
        ServiceProcess::Hyperexponential { mean: 1.0, stddev: 1.0 },
        1_000,
    );
    let err = run(&degenerate).unwrap_err();
    assert!(matches!(err, SimError::InvalidDistributionParameters { .. }));
    assert!(err.to_string().contains("degenerate distribution"));

    let zero_rate = StationConfig::mm1(0.0, 1.0, 1_000);
    assert!(matches!(
        run(&zero_rate),
        Err(SimError::InvalidDistributionParameters { .. })
    ));
}

#[test]
fn zero_customers_rejected() {
    let err = run(&StationConfig::mm1(0.5, 1.0, 0)).unwrap_err();
    assert!(matches!(err, SimError::Configuration(_)));
    assert!(err.is_configuration_error());
}

#[test]
fn sweep_with_unstable_rate_fails() {
    let template = StationConfig::mm1(0.5, 1.0, 500);
    assert!(matches!(
        sweep_arrival_rates(&template, &[0.3, 0.6, 1.0], 2),
        Err(SimError::UnstableSystem { .. })
    ));
}
