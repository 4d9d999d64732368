//! G/M/1 with hyperexponential interarrivals (cv² = 9) across the study sweep.

use queuesim_components::{run_replications, sweep_arrival_rates, STUDY_ARRIVAL_RATES};
use queuesim_core::{ArrivalProcess, StationConfig};
use queuesim_metrics::{theory, SweepPoint};

fn deviation_from_heavy_traffic(point: &SweepPoint) -> f64 {
    let approx = theory::gm1_heavy_traffic(point.lambda, 1.0, 9.0)
        .unwrap()
        .avg_wait_time;
    (point.result.avg_wait_time - approx).abs() / approx
}

fn relative_margin(point: &SweepPoint) -> f64 {
    point.result.wait_time_margin / point.result.avg_wait_time
}

#[test]
fn gm1_half_load_matches_theory() {
    let config = StationConfig::gm1_hyperexponential(0.5, 1.0, 200_000).with_seed(11);
    let agg = run_replications(&config, 5).unwrap();
    let expected = theory::gm1_hyperexponential(0.5, 1.0, 9.0).unwrap();

    assert!(
        (agg.avg_utilization - expected.avg_utilization).abs() < 0.02,
        "utilization {}",
        agg.avg_utilization
    );
    let rel = (agg.avg_wait_time - expected.avg_wait_time).abs() / expected.avg_wait_time;
    assert!(rel < 0.15, "wait {} vs {}", agg.avg_wait_time, expected.avg_wait_time);
}

#[test]
fn sweep_keeps_coefficient_of_variation() {
    let template = StationConfig::gm1_hyperexponential(0.5, 1.0, 1_000);
    let config = template.with_arrival_rate(0.1);
    match config.arrival_process {
        ArrivalProcess::Renewal { mean, stddev } => {
            assert!((mean - 10.0).abs() < 1e-12);
            assert!((stddev / mean - 3.0).abs() < 1e-12);
        }
        other => panic!("unexpected arrival process {other:?}"),
    }
}

fn study_sweep() -> Vec<SweepPoint> {
    let template = StationConfig::gm1_hyperexponential(0.5, 1.0, 20_000).with_seed(3);
    let points = sweep_arrival_rates(&template, &STUDY_ARRIVAL_RATES, 3).unwrap();
    assert_eq!(points.len(), STUDY_ARRIVAL_RATES.len());
    points
}

fn band_mean(slice: &[SweepPoint], f: fn(&SweepPoint) -> f64) -> f64 {
    slice.iter().map(f).sum::<f64>() / slice.len() as f64
}

#[test]
fn low_lambda_deviates_more_from_approximation() {
    let points = study_sweep();

    let low = deviation_from_heavy_traffic(&points[0]);
    let high = deviation_from_heavy_traffic(&points[8]);
    assert!(low > 0.4, "deviation at 0.1: {low}");
    assert!(low > high, "deviation at 0.1 ({low}) <= at 0.9 ({high})");

    let low_band = band_mean(&points[0..4], deviation_from_heavy_traffic);
    let high_band = band_mean(&points[5..9], deviation_from_heavy_traffic);
    assert!(
        low_band > high_band,
        "low band {low_band} <= high band {high_band}"
    );
}

#[test]
fn estimates_tighten_as_lambda_grows() {
    let points = study_sweep();

    let low = relative_margin(&points[0]);
    let high = relative_margin(&points[8]);
    assert!(low > high, "relative margin at 0.1 ({low}) <= at 0.9 ({high})");

    let low_band = band_mean(&points[0..4], relative_margin);
    let high_band = band_mean(&points[5..9], relative_margin);
    assert!(
        low_band > high_band,
        "low band {low_band} <= high band {high_band}"
    );

    for pair in points.windows(2) {
        assert!(pair[0].result.avg_utilization < pair[1].result.avg_utilization + 0.02);
    }
}
