use super::record::RequestRecord;
use media_bench_report::report::ThumbnailBenchmarkReport;

pub struct BenchmarkReportBuilder;

impl BenchmarkReportBuilder {
    /// Folds request outcomes into a report.
    ///
    /// `corrupted` is only reported when `track_corruption` is set.
    pub fn build(records: &[RequestRecord], track_corruption: bool) -> ThumbnailBenchmarkReport {
        let mut failed = 0;
        let mut corrupted = 0;
        let mut request_times = Vec::with_capacity(records.len());

        for record in records {
            match *record {
                RequestRecord::Completed {
                    latency_ms,
                    corrupted: is_corrupted,
                } => {
                    request_times.push(latency_ms);
                    if is_corrupted {
                        corrupted += 1;
                    }
                }
                RequestRecord::Failed => failed += 1,
            }
        }

        request_times.sort_unstable();
        let count = request_times.len() as u64;

        let mean = if request_times.is_empty() {
            None
        } else {
            Some(request_times.iter().sum::<u64>() as f64 / count as f64)
        };

        // Upper middle element for even counts, no interpolation.
        let median = request_times.get(request_times.len() / 2).copied();

        ThumbnailBenchmarkReport {
            failed,
            corrupted: track_corruption.then_some(corrupted),
            min: request_times.first().copied(),
            max: request_times.last().copied(),
            mean,
            median,
            count,
            request_times,
        }
    }
}
