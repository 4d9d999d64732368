//! Error types for the simulation engine

use thiserror::Error;

/// Top-level error type for simulation operations
///
/// Every variant is detected synchronously. A replication that hits one of
/// these aborts without reporting partial statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Invalid {law} parameters: {reason}")]
    InvalidDistributionParameters { law: &'static str, reason: String },

    #[error("Unstable system: arrival rate {arrival_rate} >= service rate {service_rate}")]
    UnstableSystem { arrival_rate: f64, service_rate: f64 },

    #[error("Event queue exhausted with {served}/{target} customers served")]
    SchedulerExhausted { served: u64, target: u64 },

    #[error("Station invariant violated at t={time}: {reason}")]
    InvariantViolation { time: f64, reason: &'static str },

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl SimError {
    pub(crate) fn invalid(law: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidDistributionParameters {
            law,
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by the caller's parameters rather than
    /// by an engine defect.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            SimError::SchedulerExhausted { .. } | SimError::InvariantViolation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::UnstableSystem {
            arrival_rate: 1.0,
            service_rate: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Unstable system: arrival rate 1 >= service rate 1"
        );

        let err = SimError::invalid("hyperexponential", "stddev must exceed mean");
        assert_eq!(
            err.to_string(),
            "Invalid hyperexponential parameters: stddev must exceed mean"
        );
    }

    #[test]
    fn test_scheduler_exhausted_is_a_defect() {
        let err = SimError::SchedulerExhausted { served: 3, target: 10 };
        assert!(!err.is_configuration_error());
        let err = SimError::InvariantViolation {
            time: 1.5,
            reason: "departure while the server is idle",
        };
        assert!(!err.is_configuration_error());
        assert_eq!(
            err.to_string(),
            "Station invariant violated at t=1.5: departure while the server is idle"
        );
        assert!(SimError::Configuration("x".into()).is_configuration_error());
    }
}
