//! Variate generators for interarrival and service times
//!
//! This module provides the two time laws the station understands: the
//! memoryless exponential law and Morse's two-stage hyperexponential law for
//! variability above the exponential (squared coefficient of variation > 1).
//!
//! The free functions [`exponential`] and [`hyperexponential`] validate their
//! parameters on every call. The hot loop instead uses the validated
//! [`Exponential`] / [`Hyperexponential`] samplers (or the [`TimeLaw`] sum
//! type over them), which implement [`rand_distr::Distribution`] and never
//! re-check parameters.

use crate::error::SimError;
use crate::randomness::uniform_open_closed;
use rand::Rng;
use rand_distr::Distribution;

/// Draw one exponential variate with the given rate: `-ln(U)/rate`, `U ∈ (0, 1]`.
///
/// # Errors
///
/// Returns `InvalidDistributionParameters` if `rate` is not a positive finite number.
pub fn exponential<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> Result<f64, SimError> {
    Ok(Exponential::new(rate)?.sample(rng))
}

/// Draw one two-stage hyperexponential variate with the given mean and standard deviation.
///
/// # Errors
///
/// Returns `InvalidDistributionParameters` if `stddev <= mean` (a two-stage
/// hyperexponential cannot represent cv < 1) or if either value is not a
/// positive finite number.
pub fn hyperexponential<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    stddev: f64,
) -> Result<f64, SimError> {
    Ok(Hyperexponential::new(mean, stddev)?.sample(rng))
}

fn check_positive(law: &'static str, name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(
            law,
            format!("{name} must be positive and finite, got {value}"),
        ))
    }
}

/// Exponential law parameterized by its rate (events per time unit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self, SimError> {
        check_positive("exponential", "rate", rate)?;
        Ok(Self { rate })
    }

    /// Get the rate parameter
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mean of the law (1/rate)
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }
}

impl Distribution<f64> for Exponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        -uniform_open_closed(rng).ln() / self.rate
    }
}

/// Morse's two-stage hyperexponential law matched to a mean and standard deviation.
///
/// With `z = (stddev/mean)^2`, sub-population 1 is chosen with probability
/// `p = (1 - sqrt((z-1)/(z+1))) / 2` and has mean `mean/(2p)`; sub-population
/// 2 has mean `mean/(2(1-p))`. This reproduces the target mean exactly and,
/// since `p(1-p) = 1/(2(z+1))`, the second moment `mean^2 (z+1)`, i.e. the
/// target variance `stddev^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperexponential {
    mean: f64,
    stddev: f64,
    p: f64,
}

impl Hyperexponential {
    pub fn new(mean: f64, stddev: f64) -> Result<Self, SimError> {
        check_positive("hyperexponential", "mean", mean)?;
        check_positive("hyperexponential", "stddev", stddev)?;
        if stddev <= mean {
            return Err(SimError::invalid(
                "hyperexponential",
                format!("degenerate distribution: stddev {stddev} must exceed mean {mean}"),
            ));
        }

        let z = (stddev / mean).powi(2);
        let p = 0.5 * (1.0 - ((z - 1.0) / (z + 1.0)).sqrt());
        Ok(Self { mean, stddev, p })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Squared coefficient of variation
    pub fn squared_cv(&self) -> f64 {
        (self.stddev / self.mean).powi(2)
    }

    /// Probability of drawing from the long-mean sub-population
    pub fn branch_probability(&self) -> f64 {
        self.p
    }

    /// Rates `(λ1, λ2)` of the two exponential phases.
    pub fn phase_rates(&self) -> (f64, f64) {
        (2.0 * self.p / self.mean, 2.0 * (1.0 - self.p) / self.mean)
    }
}

impl Distribution<f64> for Hyperexponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let scale = if rng.gen::<f64>() > self.p {
            self.mean / (1.0 - self.p)
        } else {
            self.mean / self.p
        };
        -0.5 * scale * uniform_open_closed(rng).ln()
    }
}

/// A validated time law, used for both interarrival and service draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeLaw {
    Exponential(Exponential),
    Hyperexponential(Hyperexponential),
}

impl TimeLaw {
    /// Mean of the law
    pub fn mean(&self) -> f64 {
        match self {
            TimeLaw::Exponential(d) => d.mean(),
            TimeLaw::Hyperexponential(d) => d.mean(),
        }
    }

    /// Rate implied by the law (1/mean)
    pub fn rate(&self) -> f64 {
        1.0 / self.mean()
    }

    /// Squared coefficient of variation of the law
    pub fn squared_cv(&self) -> f64 {
        match self {
            TimeLaw::Exponential(_) => 1.0,
            TimeLaw::Hyperexponential(d) => d.squared_cv(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeLaw::Exponential(_) => "exponential",
            TimeLaw::Hyperexponential(_) => "hyperexponential",
        }
    }
}

impl Distribution<f64> for TimeLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            TimeLaw::Exponential(d) => d.sample(rng),
            TimeLaw::Hyperexponential(d) => d.sample(rng),
        }
    }
}
