use crate::args::common::MediaBenchArgs;
use crate::benchmarks::benchmark::create_benchmark;
use crate::client::MediaClient;
use crate::error::BenchError;
use crate::thumbnails::ThumbnailPlan;
use tracing::info;

pub struct BenchmarkRunner {
    args: MediaBenchArgs,
}

impl BenchmarkRunner {
    pub fn new(args: MediaBenchArgs) -> Self {
        Self { args }
    }

    pub async fn run(self) -> Result<(), BenchError> {
        let client = MediaClient::new(self.args.target())?;
        let plan = ThumbnailPlan::load(self.args.thumbnails())?;
        info!(
            "Starting to benchmark: {} with server: {}",
            self.args.kind(),
            self.args.target()
        );

        let benchmark = create_benchmark(self.args.benchmark_kind, client, plan);
        benchmark.display_settings();
        benchmark.run().await?;

        info!("Benchmark {} finished", benchmark.kind());
        Ok(())
    }
}
