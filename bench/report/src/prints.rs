use crate::{report::ThumbnailBenchmarkReport, summary::ThumbnailBenchmarkSummary};
use colored::{ColoredString, Colorize};
use tracing::info;

impl ThumbnailBenchmarkReport {
    pub fn print_summary(&self) {
        info!("\n{}\n", self.summary().formatted_string());
    }
}

impl ThumbnailBenchmarkSummary {
    pub fn formatted_string(&self) -> ColoredString {
        let min = format_millis(self.min);
        let max = format_millis(self.max);
        let median = format_millis(self.median);
        let mean = self
            .mean
            .map(|mean| format!("{mean:.2} ms"))
            .unwrap_or_else(|| "n/a".to_owned());

        let corrupted = self
            .corrupted
            .map(|corrupted| format!(", corrupted: {corrupted}"))
            .unwrap_or_default();

        let line = format!(
            "Results: completed: {}, failed: {}{}, min latency: {}, max latency: {}, \
            mean latency: {}, median latency: {}",
            self.count, self.failed, corrupted, min, max, mean, median,
        );

        if self.failed > 0 || self.corrupted.unwrap_or_default() > 0 {
            line.red()
        } else {
            line.green()
        }
    }
}

fn format_millis(value: Option<u64>) -> String {
    value
        .map(|value| format!("{value} ms"))
        .unwrap_or_else(|| "n/a".to_owned())
}
