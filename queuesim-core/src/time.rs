//! Simulation time management

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Simulation time in abstract time units
///
/// SimTime represents a point on the simulated clock as a non-negative `f64`
/// measured from the simulation start. Queueing laws are parameterized by
/// rates per time unit, so no wall-clock unit is attached.
///
/// Ordering is total (`f64::total_cmp`), which makes `SimTime` usable as a
/// heap key. Construction rejects NaN and negative values, so the total order
/// coincides with the numeric order for every value the engine produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(f64);

impl SimTime {
    /// Create a new SimTime at the simulation start (time zero)
    pub const fn zero() -> Self {
        SimTime(0.0)
    }

    /// Create a SimTime from a raw time value
    ///
    /// Returns `None` for negative, infinite or NaN values.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(SimTime(value))
        } else {
            None
        }
    }

    /// Get the raw time value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Elapsed time since an earlier instant, saturating at zero
    pub fn since(&self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Advance by a non-negative delay. Negative or NaN delays are clamped to zero.
impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: f64) -> Self::Output {
        if rhs > 0.0 {
            SimTime(self.0 + rhs)
        } else {
            self
        }
    }
}

impl Sub<SimTime> for SimTime {
    type Output = f64;

    fn sub(self, rhs: SimTime) -> Self::Output {
        self.since(rhs)
    }
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime::zero()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.6}", self.0)
    }
}
