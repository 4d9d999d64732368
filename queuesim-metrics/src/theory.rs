//! Closed-form reference values for the studied station variants.
//!
//! These are for comparison by outer tooling and tests; the engine never
//! consults them.

use queuesim_core::{Hyperexponential, SimError};
use serde::{Deserialize, Serialize};

const FIXED_POINT_TOLERANCE: f64 = 1e-13;
const FIXED_POINT_MAX_ITERATIONS: usize = 1_000_000;

/// Steady-state metrics predicted by queueing theory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalMetrics {
    pub avg_wait_time: f64,
    pub avg_queue_length: f64,
    pub avg_utilization: f64,
    pub avg_response_time: f64,
}

fn check_rates(lambda: f64, mu: f64) -> Result<(), SimError> {
    for (name, value) in [("arrival rate", lambda), ("service rate", mu)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(SimError::InvalidDistributionParameters {
                law: "exponential",
                reason: format!("{name} must be positive and finite, got {value}"),
            });
        }
    }
    if lambda >= mu {
        return Err(SimError::UnstableSystem {
            arrival_rate: lambda,
            service_rate: mu,
        });
    }
    Ok(())
}

fn from_wait(lambda: f64, mu: f64, wq: f64) -> TheoreticalMetrics {
    TheoreticalMetrics {
        avg_wait_time: wq,
        avg_queue_length: lambda * wq,
        avg_utilization: lambda / mu,
        avg_response_time: wq + 1.0 / mu,
    }
}

/// M/M/1: `Wq = ρ / (μ(1 - ρ))`.
pub fn mm1(lambda: f64, mu: f64) -> Result<TheoreticalMetrics, SimError> {
    check_rates(lambda, mu)?;
    let rho = lambda / mu;
    Ok(from_wait(lambda, mu, rho / (mu * (1.0 - rho))))
}

/// M/G/1 by Pollaczek-Khinchine: `Lq = ρ²(1 + cs²) / (2(1 - ρ))`.
///
/// `cs2` is the squared coefficient of variation of the service time.
pub fn mg1_pollaczek_khinchine(
    lambda: f64,
    mu: f64,
    cs2: f64,
) -> Result<TheoreticalMetrics, SimError> {
    check_rates(lambda, mu)?;
    if !(cs2.is_finite() && cs2 >= 0.0) {
        return Err(SimError::Configuration(format!(
            "squared coefficient of variation must be non-negative, got {cs2}"
        )));
    }
    let rho = lambda / mu;
    let lq = rho * rho * (1.0 + cs2) / (2.0 * (1.0 - rho));
    Ok(from_wait(lambda, mu, lq / lambda))
}

/// G/M/1 with two-stage hyperexponential interarrivals of squared cv `ca2`.
///
/// Solves `σ = A*(μ(1 - σ))` where `A*` is the Laplace-Stieltjes transform of
/// the interarrival law, then `Wq = σ / (μ(1 - σ))`.
pub fn gm1_hyperexponential(
    lambda: f64,
    mu: f64,
    ca2: f64,
) -> Result<TheoreticalMetrics, SimError> {
    check_rates(lambda, mu)?;
    let mean = 1.0 / lambda;
    let law = Hyperexponential::new(mean, ca2.sqrt() * mean)?;
    let sigma = gm1_sigma(&law, mu);
    Ok(from_wait(lambda, mu, sigma / (mu * (1.0 - sigma))))
}

/// Heavy-traffic approximation for G/M/1:
/// `Wq ≈ ρ/(1 - ρ) · (ca² + 1)/(2μ)`.
///
/// Accurate near saturation, increasingly pessimistic as `ρ` falls.
pub fn gm1_heavy_traffic(
    lambda: f64,
    mu: f64,
    ca2: f64,
) -> Result<TheoreticalMetrics, SimError> {
    check_rates(lambda, mu)?;
    if !(ca2.is_finite() && ca2 >= 0.0) {
        return Err(SimError::Configuration(format!(
            "squared coefficient of variation must be non-negative, got {ca2}"
        )));
    }
    let rho = lambda / mu;
    Ok(from_wait(lambda, mu, rho / (1.0 - rho) * (ca2 + 1.0) / (2.0 * mu)))
}

/// Smallest root in `(0, 1)` of `σ = A*(μ(1 - σ))`.
///
/// Iterating from zero increases monotonically towards that root because
/// `A*` is decreasing and convex.
pub fn gm1_sigma(law: &Hyperexponential, mu: f64) -> f64 {
    let p = law.branch_probability();
    let (l1, l2) = law.phase_rates();
    let transform = |s: f64| p * l1 / (l1 + s) + (1.0 - p) * l2 / (l2 + s);

    let mut sigma = 0.0;
    for _ in 0..FIXED_POINT_MAX_ITERATIONS {
        let next = transform(mu * (1.0 - sigma));
        if (next - sigma).abs() < FIXED_POINT_TOLERANCE {
            return next;
        }
        sigma = next;
    }
    sigma
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm1_closed_form() {
        let m = mm1(0.5, 1.0).unwrap();
        assert!((m.avg_wait_time - 1.0).abs() < 1e-12);
        assert!((m.avg_queue_length - 0.5).abs() < 1e-12);
        assert!((m.avg_utilization - 0.5).abs() < 1e-12);
        assert!((m.avg_response_time - 2.0).abs() < 1e-12);

        let heavy = mm1(0.9, 1.0).unwrap();
        assert!((heavy.avg_queue_length - 8.1).abs() < 1e-9);
    }

    #[test]
    fn test_pk_reduces_to_mm1() {
        let pk = mg1_pollaczek_khinchine(0.7, 1.0, 1.0).unwrap();
        let m = mm1(0.7, 1.0).unwrap();
        assert!((pk.avg_wait_time - m.avg_wait_time).abs() < 1e-12);
    }

    #[test]
    fn test_pk_hyperexponential_service() {
        // rho = 0.5, cs2 = 4: Lq = 0.25 * 5 / 1 = 1.25
        let pk = mg1_pollaczek_khinchine(0.5, 1.0, 4.0).unwrap();
        assert!((pk.avg_queue_length - 1.25).abs() < 1e-12);
        assert!((pk.avg_wait_time - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_gm1_sigma_solves_equation() {
        let law = Hyperexponential::new(2.0, 6.0).unwrap();
        let sigma = gm1_sigma(&law, 1.0);
        assert!(sigma > 0.0 && sigma < 1.0);

        let p = law.branch_probability();
        let (l1, l2) = law.phase_rates();
        let s = 1.0 - sigma;
        let rhs = p * l1 / (l1 + s) + (1.0 - p) * l2 / (l2 + s);
        assert!((sigma - rhs).abs() < 1e-10);
    }

    #[test]
    fn test_gm1_exceeds_mm1_for_bursty_arrivals() {
        let gm1 = gm1_hyperexponential(0.5, 1.0, 9.0).unwrap();
        let m = mm1(0.5, 1.0).unwrap();
        assert!(gm1.avg_wait_time > m.avg_wait_time);
        assert!((gm1.avg_utilization - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_heavy_traffic_converges_to_exact() {
        let rel = |lambda: f64| {
            let exact = gm1_hyperexponential(lambda, 1.0, 9.0).unwrap().avg_wait_time;
            let approx = gm1_heavy_traffic(lambda, 1.0, 9.0).unwrap().avg_wait_time;
            (approx - exact).abs() / exact
        };
        assert!(rel(0.1) > 1.0);
        assert!(rel(0.9) < 0.02);
        assert!(rel(0.3) > rel(0.6));

        // ca2 = 1 gives back M/M/1 exactly.
        let m = mm1(0.4, 1.0).unwrap();
        let ht = gm1_heavy_traffic(0.4, 1.0, 1.0).unwrap();
        assert!((m.avg_wait_time - ht.avg_wait_time).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_unstable_and_invalid() {
        assert!(matches!(mm1(1.0, 1.0), Err(SimError::UnstableSystem { .. })));
        assert!(matches!(
            mg1_pollaczek_khinchine(2.0, 1.0, 4.0),
            Err(SimError::UnstableSystem { .. })
        ));
        assert!(matches!(
            gm1_hyperexponential(0.5, 1.0, 0.5),
            Err(SimError::InvalidDistributionParameters { .. })
        ));
        assert!(mm1(-1.0, 1.0).is_err());
        assert!(mg1_pollaczek_khinchine(0.5, 1.0, -1.0).is_err());
    }
}
