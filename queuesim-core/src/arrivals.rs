//! Arrival streams
//!
//! An [`ArrivalStream`] yields a monotone non-decreasing sequence of arrival
//! instants. The station pulls one instant at a time and never asks for an
//! arrival it has already scheduled, so the station is agnostic to whether the
//! instants are drawn lazily or were materialized up front.

use crate::dists::{Exponential, Hyperexponential, TimeLaw};
use crate::randomness::SimRng;
use crate::time::SimTime;
use rand_distr::Distribution;
use tracing::debug;

/// Source of arrival instants for one replication.
pub trait ArrivalStream: Send {
    /// Return the next arrival instant, or `None` once the stream is exhausted.
    fn next_arrival(&mut self) -> Option<SimTime>;

    /// Number of arrivals handed out so far.
    fn issued(&self) -> u64;
}

/// Poisson arrivals: each gap is drawn on demand from an exponential law.
///
/// The stream is infinite; the station decides when to stop pulling.
pub struct PoissonArrivals {
    law: Exponential,
    rng: SimRng,
    clock: SimTime,
    issued: u64,
}

impl PoissonArrivals {
    pub fn new(law: Exponential, rng: SimRng) -> Self {
        Self {
            law,
            rng,
            clock: SimTime::zero(),
            issued: 0,
        }
    }

    /// Get the rate parameter
    pub fn rate(&self) -> f64 {
        self.law.rate()
    }
}

impl ArrivalStream for PoissonArrivals {
    fn next_arrival(&mut self) -> Option<SimTime> {
        let gap = self.law.sample(&mut self.rng);
        self.clock = self.clock + gap;
        self.issued += 1;
        Some(self.clock)
    }

    fn issued(&self) -> u64 {
        self.issued
    }
}

const RESERVE_LIMIT: usize = 1 << 20;

/// Renewal arrivals with a general interarrival law, materialized before the
/// simulation starts.
///
/// The whole arrival horizon of `count` customers is fixed ahead of time by
/// cumulative sums of interarrival draws, and a cursor walks it.
#[derive(Debug, Clone)]
pub struct RenewalArrivals {
    instants: Vec<SimTime>,
    cursor: usize,
}

impl RenewalArrivals {
    /// Pre-generate `count` arrival instants from `law`.
    pub fn generate(law: &TimeLaw, count: u64, rng: &mut SimRng) -> Self {
        let reserve = usize::try_from(count).map_or(RESERVE_LIMIT, |n| n.min(RESERVE_LIMIT));
        let mut instants = Vec::with_capacity(reserve);
        let mut clock = SimTime::zero();
        for _ in 0..count {
            clock = clock + law.sample(rng);
            instants.push(clock);
        }
        debug!(
            law = law.name(),
            count,
            horizon = clock.as_f64(),
            "Pre-generated renewal arrivals"
        );
        Self {
            instants,
            cursor: 0,
        }
    }

    /// Convenience for the hyperexponential interarrival law.
    pub fn hyperexponential(law: Hyperexponential, count: u64, rng: &mut SimRng) -> Self {
        Self::generate(&TimeLaw::Hyperexponential(law), count, rng)
    }

    /// Total number of pre-generated arrivals
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Arrivals not yet handed out
    pub fn remaining(&self) -> usize {
        self.instants.len() - self.cursor
    }

    /// The full pre-generated horizon
    pub fn instants(&self) -> &[SimTime] {
        &self.instants
    }
}

impl ArrivalStream for RenewalArrivals {
    fn next_arrival(&mut self) -> Option<SimTime> {
        let next = self.instants.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    fn issued(&self) -> u64 {
        self.cursor as u64
    }
}
