//! Error types for statistics reduction and export

use queuesim_core::SimError;
use thiserror::Error;

/// Errors raised while reducing or exporting results
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("No replication results to reduce")]
    Empty,
}

impl From<MetricsError> for SimError {
    fn from(err: MetricsError) -> Self {
        SimError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_maps_to_configuration_error() {
        let err: SimError = MetricsError::Empty.into();
        assert_eq!(
            err,
            SimError::Configuration("No replication results to reduce".to_string())
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = MetricsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
