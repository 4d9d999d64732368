//! JSON export of sweep results

use crate::error::MetricsError;
use crate::export::ResultExporter;
use crate::result::SweepPoint;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    /// `pretty` adds whitespace for readability
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }
}

impl ResultExporter for JsonExporter {
    fn export(&self, points: &[SweepPoint]) -> Result<(), MetricsError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(points)
        } else {
            serde_json::to_string(points)
        }?;

        let mut file = File::create(&self.path).map_err(|e| {
            MetricsError::Export(format!("Failed to create {}: {e}", self.path.display()))
        })?;
        file.write_all(json.as_bytes())?;

        debug!(points = points.len(), path = %self.path.display(), "JSON results exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{AggregateResult, ReplicationResult};

    #[test]
    fn test_json_export_round_trip() {
        let replication = ReplicationResult {
            seed: 4,
            avg_wait_time: 3.5,
            wait_time_margin: 0.2,
            avg_response_time: 4.5,
            response_time_margin: 0.2,
            avg_queue_length: 1.75,
            avg_utilization: 0.5,
            avg_service_time: 1.0,
            customers_served: 10,
            events_processed: 20,
            simulated_time: 20.0,
        };
        let points = vec![SweepPoint {
            lambda: 0.5,
            result: AggregateResult::from_replications(vec![replication]).unwrap(),
        }];

        let temp_file = std::env::temp_dir().join("queuesim_test_sweep.json");
        JsonExporter::new(&temp_file, true).export(&points).unwrap();

        let content = std::fs::read_to_string(&temp_file).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["lambda"], 0.5);
        assert_eq!(parsed[0]["result"]["avg_wait_time"], 3.5);

        let back: Vec<SweepPoint> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, points);

        std::fs::remove_file(temp_file).ok();
    }
}
