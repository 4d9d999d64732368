//! Flat-record export of sweep results
//!
//! Each [`SweepPoint`] becomes one record. CSV output starts with
//! `lambda,avg_wait_time,avg_queue_length,avg_utilization,avg_response_time`
//! followed by the margin columns.

pub mod csv;
pub mod json;

use crate::error::MetricsError;
use crate::result::SweepPoint;
use std::path::Path;

/// Trait for writing sweep results to some destination
pub trait ResultExporter {
    fn export(&self, points: &[SweepPoint]) -> Result<(), MetricsError>;
}

/// Export sweep results as a JSON array
///
/// # Example
/// ```no_run
/// use queuesim_metrics::export::export_json;
/// # let points = Vec::new();
/// export_json(&points, "results/sweep.json", true).unwrap();
/// ```
pub fn export_json(
    points: &[SweepPoint],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), MetricsError> {
    json::JsonExporter::new(path.as_ref(), pretty).export(points)
}

/// Export sweep results as CSV, one row per arrival rate
pub fn export_csv(points: &[SweepPoint], path: impl AsRef<Path>) -> Result<(), MetricsError> {
    csv::CsvExporter::new(path.as_ref()).export(points)
}
