use super::summary::ThumbnailBenchmarkSummary;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Result of one thumbnail load run, as written to the reports directory.
///
/// All latencies are whole milliseconds. `request_times` is sorted ascending.
/// `corrupted` is only present for runs that validated response bytes.
/// Statistics are `None` when no request completed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailBenchmarkReport {
    /// Requests that errored or returned a non-success status
    pub failed: u64,

    /// Completed requests whose body differed from the reference thumbnail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrupted: Option<u64>,

    /// Latency of every completed request
    pub request_times: Vec<u64>,

    pub min: Option<u64>,
    pub max: Option<u64>,
    pub mean: Option<f64>,

    /// Element at `count / 2` of the sorted samples, without interpolation
    pub median: Option<u64>,

    /// Number of completed requests
    pub count: u64,
}

impl ThumbnailBenchmarkReport {
    pub fn summary(&self) -> ThumbnailBenchmarkSummary {
        ThumbnailBenchmarkSummary::new(
            self.failed,
            self.corrupted,
            self.min,
            self.max,
            self.mean,
            self.median,
            self.count,
        )
    }

    /// Writes the report as `<output_dir>/<timestamp_millis>.json`, creating the directory if needed.
    pub fn dump_to_json(&self, output_dir: &Path, timestamp_millis: i64) -> io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(format!("{timestamp_millis}.json"));
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}
