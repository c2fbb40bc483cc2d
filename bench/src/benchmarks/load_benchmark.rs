use super::benchmark::Benchmarkable;
use super::generate_benchmark::reference_path;
use crate::analytics::record::RequestRecord;
use crate::analytics::report_builder::BenchmarkReportBuilder;
use crate::args::simple::BenchmarkKind;
use crate::args::thumbnail::ThumbnailParams;
use crate::client::MediaClient;
use crate::error::BenchError;
use crate::identifier::MediaIdentifier;
use crate::thumbnails::ThumbnailPlan;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use derive_new::new;
use futures::future::join_all;
use media_bench_report::report::ThumbnailBenchmarkReport;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::task;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// Explicit thumbnail parameters plus the directory of reference thumbnails they were generated with.
#[derive(Debug, Clone, new)]
pub struct Validation {
    pub params: ThumbnailParams,
    pub expected_dir: PathBuf,
}

/// Issues every requested thumbnail fetch at once and reports latency statistics.
#[derive(new)]
pub struct LoadBenchmark {
    client: MediaClient,
    plan: ThumbnailPlan,
    validation: Option<Validation>,
    reports_dir: PathBuf,
}

#[async_trait]
impl Benchmarkable for LoadBenchmark {
    async fn run(&self) -> Result<(), BenchError> {
        let report = self.execute().await?;

        info!("Saving report...");
        let report_path = report.dump_to_json(&self.reports_dir, Utc::now().timestamp_millis())?;
        info!("Report saved to {}", report_path.display());

        report.print_summary();
        Ok(())
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Load
    }

    fn plan(&self) -> &ThumbnailPlan {
        &self.plan
    }

    fn display_settings(&self) {
        let params = match &self.validation {
            Some(validation) => format!(
                "{}x{} {}, animated: {}, validating against {}",
                validation.params.width,
                validation.params.height,
                validation.params.method,
                validation.params.animated,
                validation.expected_dir.display()
            ),
            None => "server defaults".to_owned(),
        };
        info!(
            "Benchmark: {}, media items: {}, total requests: {}, thumbnails: {}",
            self.kind(),
            self.plan.entries().len(),
            self.total_requests(),
            params,
        );
    }
}

impl LoadBenchmark {
    /// Runs all requests and builds the report without writing it.
    pub async fn execute(&self) -> Result<ThumbnailBenchmarkReport, BenchError> {
        let references = match &self.validation {
            Some(validation) => Some(self.load_references(validation).await?),
            None => None,
        };
        let params = self.validation.as_ref().map(|validation| validation.params);

        let mut futures = Vec::with_capacity(self.plan.total_requests() as usize);
        for (identifier, count) in self.plan.entries() {
            let expected = references
                .as_ref()
                .and_then(|references| references.get(identifier).cloned());
            for _ in 0..*count {
                futures.push(task::spawn(fetch_thumbnail(
                    self.client.clone(),
                    identifier.clone(),
                    params,
                    expected.clone(),
                )));
            }
        }

        info!("Waiting for results...");
        let records = join_all(futures)
            .await
            .into_iter()
            .map(|result| {
                result.unwrap_or_else(|e| {
                    error!("Request task failed: {e}");
                    RequestRecord::Failed
                })
            })
            .collect::<Vec<_>>();

        Ok(BenchmarkReportBuilder::build(
            &records,
            self.validation.is_some(),
        ))
    }

    async fn load_references(
        &self,
        validation: &Validation,
    ) -> Result<HashMap<MediaIdentifier, Bytes>, BenchError> {
        let mut references = HashMap::new();
        for identifier in self.plan.identifiers() {
            let path = reference_path(&validation.expected_dir, identifier);
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| BenchError::MissingReference { path, source })?;
            references.insert(identifier.clone(), Bytes::from(bytes));
        }
        Ok(references)
    }
}

async fn fetch_thumbnail(
    client: MediaClient,
    identifier: MediaIdentifier,
    params: Option<ThumbnailParams>,
    expected: Option<Bytes>,
) -> RequestRecord {
    info!("Starting download of {identifier}");
    let start = Instant::now();
    match client.get_thumbnail(&identifier, params.as_ref()).await {
        Ok(body) => {
            let latency_ms = start.elapsed().as_millis() as u64;
            match expected {
                Some(expected) if expected != body => {
                    warn!("Thumbnail for {identifier} does not match the reference");
                    RequestRecord::corrupted(latency_ms)
                }
                _ => RequestRecord::completed(latency_ms),
            }
        }
        Err(e) => {
            warn!("Failed to download {identifier}: {e}");
            RequestRecord::Failed
        }
    }
}
