//! CSV export, one row per arrival rate

use crate::error::MetricsError;
use crate::export::ResultExporter;
use crate::result::SweepPoint;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column header of the flat result record
pub const CSV_HEADER: &str = "lambda,avg_wait_time,avg_queue_length,avg_utilization,avg_response_time,wait_time_margin,response_time_margin,replications";

#[derive(Debug)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ResultExporter for CsvExporter {
    fn export(&self, points: &[SweepPoint]) -> Result<(), MetricsError> {
        let file = File::create(&self.path).map_err(|e| {
            MetricsError::Export(format!("Failed to create {}: {e}", self.path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        write_csv(points, &mut writer)?;
        writer.flush()?;

        debug!(rows = points.len(), path = %self.path.display(), "CSV results exported");
        Ok(())
    }
}

/// Write the header and one row per point to `writer`.
pub fn write_csv<W: Write>(points: &[SweepPoint], writer: &mut W) -> Result<(), MetricsError> {
    writeln!(writer, "{CSV_HEADER}")?;
    for point in points {
        let r = &point.result;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            point.lambda,
            r.avg_wait_time,
            r.avg_queue_length,
            r.avg_utilization,
            r.avg_response_time,
            r.wait_time_margin,
            r.response_time_margin,
            r.replications
        )?;
    }
    Ok(())
}
