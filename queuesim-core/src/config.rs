//! Station configuration and up-front validation
//!
//! A [`StationConfig`] names the arrival law, the service law and how many
//! customers one replication serves. [`StationConfig::validate`] performs every
//! parameter check once, before any event is scheduled, and returns a
//! [`ValidatedConfig`] holding the ready-to-sample laws.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arrivals::{ArrivalStream, PoissonArrivals, RenewalArrivals};
use crate::dists::{Exponential, Hyperexponential, TimeLaw};
use crate::error::SimError;
use crate::randomness::{stream_rng, SimRng, Stream};

/// Seed used when a configuration does not name one.
pub const DEFAULT_SEED: u64 = 0x5EED_0001;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// How customers arrive at the station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum ArrivalProcess {
    /// Exponential interarrival gaps drawn on demand.
    Poisson { rate: f64 },
    /// Hyperexponential interarrival gaps, pre-generated for the whole run.
    Renewal { mean: f64, stddev: f64 },
}

impl ArrivalProcess {
    /// Validated interarrival law
    pub fn law(&self) -> Result<TimeLaw, SimError> {
        match *self {
            ArrivalProcess::Poisson { rate } => Ok(TimeLaw::Exponential(Exponential::new(rate)?)),
            ArrivalProcess::Renewal { mean, stddev } => Ok(TimeLaw::Hyperexponential(
                Hyperexponential::new(mean, stddev)?,
            )),
        }
    }

    /// Mean arrival rate λ
    pub fn rate(&self) -> f64 {
        match *self {
            ArrivalProcess::Poisson { rate } => rate,
            ArrivalProcess::Renewal { mean, .. } => 1.0 / mean,
        }
    }
}

/// How long the server takes per customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum ServiceProcess {
    Exponential { rate: f64 },
    Hyperexponential { mean: f64, stddev: f64 },
}

impl ServiceProcess {
    /// Validated service-time law
    pub fn law(&self) -> Result<TimeLaw, SimError> {
        match *self {
            ServiceProcess::Exponential { rate } => {
                Ok(TimeLaw::Exponential(Exponential::new(rate)?))
            }
            ServiceProcess::Hyperexponential { mean, stddev } => Ok(TimeLaw::Hyperexponential(
                Hyperexponential::new(mean, stddev)?,
            )),
        }
    }

    /// Mean service rate μ
    pub fn rate(&self) -> f64 {
        match *self {
            ServiceProcess::Exponential { rate } => rate,
            ServiceProcess::Hyperexponential { mean, .. } => 1.0 / mean,
        }
    }
}

/// Configuration of one single-server station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub arrival_process: ArrivalProcess,
    pub service_process: ServiceProcess,
    /// Number of customers one replication serves before it stops.
    pub target_customers: u64,
    /// Base seed; replication `i` derives its own seed from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl StationConfig {
    pub fn new(
        arrival_process: ArrivalProcess,
        service_process: ServiceProcess,
        target_customers: u64,
    ) -> Self {
        Self {
            arrival_process,
            service_process,
            target_customers,
            seed: DEFAULT_SEED,
        }
    }

    /// M/M/1: Poisson arrivals at `lambda`, exponential service at `mu`.
    pub fn mm1(lambda: f64, mu: f64, target_customers: u64) -> Self {
        Self::new(
            ArrivalProcess::Poisson { rate: lambda },
            ServiceProcess::Exponential { rate: mu },
            target_customers,
        )
    }

    /// M/G/1 with hyperexponential service of mean `1/mu` and standard
    /// deviation `2/mu` (cv² = 4).
    pub fn mg1_hyperexponential(lambda: f64, mu: f64, target_customers: u64) -> Self {
        Self::new(
            ArrivalProcess::Poisson { rate: lambda },
            ServiceProcess::Hyperexponential {
                mean: 1.0 / mu,
                stddev: 2.0 / mu,
            },
            target_customers,
        )
    }

    /// G/M/1 with hyperexponential interarrivals of mean `1/lambda` and
    /// standard deviation `3/lambda` (cv² = 9).
    pub fn gm1_hyperexponential(lambda: f64, mu: f64, target_customers: u64) -> Self {
        Self::new(
            ArrivalProcess::Renewal {
                mean: 1.0 / lambda,
                stddev: 3.0 / lambda,
            },
            ServiceProcess::Exponential { rate: mu },
            target_customers,
        )
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_target_customers(mut self, target_customers: u64) -> Self {
        self.target_customers = target_customers;
        self
    }

    /// Same service law and horizon, different arrival rate.
    ///
    /// Renewal arrivals keep their coefficient of variation.
    #[must_use]
    pub fn with_arrival_rate(mut self, lambda: f64) -> Self {
        self.arrival_process = match self.arrival_process {
            ArrivalProcess::Poisson { .. } => ArrivalProcess::Poisson { rate: lambda },
            ArrivalProcess::Renewal { mean, stddev } => {
                let cv = stddev / mean;
                ArrivalProcess::Renewal {
                    mean: 1.0 / lambda,
                    stddev: cv / lambda,
                }
            }
        };
        self
    }

    /// Mean arrival rate λ
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_process.rate()
    }

    /// Mean service rate μ
    pub fn service_rate(&self) -> f64 {
        self.service_process.rate()
    }

    /// Offered load ρ = λ/μ
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate() / self.service_rate()
    }

    /// Check every parameter and the stability guard.
    ///
    /// # Errors
    ///
    /// - `InvalidDistributionParameters` for a bad arrival or service law
    /// - `Configuration` when `target_customers` is zero
    /// - `UnstableSystem` when `arrival_rate >= service_rate`
    pub fn validate(&self) -> Result<ValidatedConfig, SimError> {
        let interarrival = self.arrival_process.law()?;
        let service = self.service_process.law()?;

        if self.target_customers == 0 {
            return Err(SimError::Configuration(
                "target_customers must be at least 1".to_string(),
            ));
        }

        let arrival_rate = interarrival.rate();
        let service_rate = service.rate();
        if arrival_rate >= service_rate {
            return Err(SimError::UnstableSystem {
                arrival_rate,
                service_rate,
            });
        }

        debug!(
            arrival_law = interarrival.name(),
            service_law = service.name(),
            arrival_rate,
            service_rate,
            target_customers = self.target_customers,
            "Station configuration validated"
        );

        Ok(ValidatedConfig {
            config: *self,
            interarrival,
            service,
        })
    }
}

/// A configuration that passed [`StationConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    config: StationConfig,
    interarrival: TimeLaw,
    service: TimeLaw,
}

impl ValidatedConfig {
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn target_customers(&self) -> u64 {
        self.config.target_customers
    }

    pub fn interarrival_law(&self) -> &TimeLaw {
        &self.interarrival
    }

    pub fn service_law(&self) -> &TimeLaw {
        &self.service
    }

    /// Build the arrival stream of one replication from its seed.
    pub fn arrival_stream(&self, seed: u64) -> Box<dyn ArrivalStream> {
        let mut rng = stream_rng(seed, Stream::Arrivals);
        match (self.config.arrival_process, self.interarrival) {
            (ArrivalProcess::Poisson { .. }, TimeLaw::Exponential(law)) => {
                Box::new(PoissonArrivals::new(law, rng))
            }
            (_, law) => Box::new(RenewalArrivals::generate(
                &law,
                self.config.target_customers,
                &mut rng,
            )),
        }
    }

    /// Random source for service-time draws of one replication.
    pub fn service_rng(&self, seed: u64) -> SimRng {
        stream_rng(seed, Stream::Service)
    }
}
