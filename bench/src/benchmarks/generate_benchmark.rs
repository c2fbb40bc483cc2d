use super::benchmark::Benchmarkable;
use crate::args::simple::BenchmarkKind;
use crate::args::thumbnail::ThumbnailParams;
use crate::client::MediaClient;
use crate::error::BenchError;
use crate::identifier::MediaIdentifier;
use crate::thumbnails::ThumbnailPlan;
use async_trait::async_trait;
use derive_new::new;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{error, info};

/// Downloads one thumbnail per media item and stores it as the expected reference.
#[derive(new)]
pub struct GenerateBenchmark {
    client: MediaClient,
    plan: ThumbnailPlan,
    params: ThumbnailParams,
    expected_dir: PathBuf,
}

#[async_trait]
impl Benchmarkable for GenerateBenchmark {
    async fn run(&self) -> Result<(), BenchError> {
        tokio::fs::create_dir_all(&self.expected_dir).await?;

        let identifiers = self.plan.identifiers();
        let total = identifiers.len();
        let futures = identifiers
            .into_iter()
            .map(|identifier| {
                task::spawn(download_expected_thumbnail(
                    self.client.clone(),
                    identifier.clone(),
                    self.params,
                    self.expected_dir.clone(),
                ))
            })
            .collect::<Vec<_>>();

        let mut failed = 0;
        for result in join_all(futures).await {
            match result {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    error!("Failed to download expected thumbnail: {e}");
                    failed += 1;
                }
                Err(e) => {
                    error!("Download task failed: {e}");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(BenchError::GenerationFailed { failed, total });
        }

        info!(
            "Stored {total} expected thumbnails in {}",
            self.expected_dir.display()
        );
        Ok(())
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Generate
    }

    fn plan(&self) -> &ThumbnailPlan {
        &self.plan
    }

    fn display_settings(&self) {
        info!(
            "Benchmark: {}, media items: {}, size: {}x{}, method: {}, animated: {}, output: {}",
            self.kind(),
            self.total_requests(),
            self.params.width,
            self.params.height,
            self.params.method,
            self.params.animated,
            self.expected_dir.display(),
        );
    }
}

async fn download_expected_thumbnail(
    client: MediaClient,
    identifier: MediaIdentifier,
    params: ThumbnailParams,
    expected_dir: PathBuf,
) -> Result<PathBuf, BenchError> {
    info!("Downloading {identifier}");
    let body = client.get_thumbnail(&identifier, Some(&params)).await?;
    let path = reference_path(&expected_dir, &identifier);
    tokio::fs::write(&path, &body).await?;
    Ok(path)
}

pub fn reference_path(expected_dir: &Path, identifier: &MediaIdentifier) -> PathBuf {
    expected_dir.join(identifier.reference_file_name())
}
