use super::generate_benchmark::GenerateBenchmark;
use super::load_benchmark::{LoadBenchmark, Validation};
use crate::{
    args::{kind::BenchmarkKindCommand, simple::BenchmarkKind},
    client::MediaClient,
    error::BenchError,
    thumbnails::ThumbnailPlan,
};
use async_trait::async_trait;

pub fn create_benchmark(
    command: BenchmarkKindCommand,
    client: MediaClient,
    plan: ThumbnailPlan,
) -> Box<dyn Benchmarkable> {
    match command {
        BenchmarkKindCommand::Generate(args) => Box::new(GenerateBenchmark::new(
            client,
            plan,
            args.thumbnail,
            args.expected_dir,
        )),
        BenchmarkKindCommand::Load(args) => {
            let validation = args
                .validate
                .then(|| Validation::new(args.thumbnail, args.expected_dir));
            Box::new(LoadBenchmark::new(client, plan, validation, args.reports_dir))
        }
    }
}

#[async_trait]
pub trait Benchmarkable: Send + Sync {
    async fn run(&self) -> Result<(), BenchError>;
    fn kind(&self) -> BenchmarkKind;
    fn plan(&self) -> &ThumbnailPlan;
    fn display_settings(&self);

    /// Number of HTTP requests the benchmark will issue.
    fn total_requests(&self) -> u64 {
        match self.kind() {
            BenchmarkKind::Generate => self.plan().identifiers().len() as u64,
            BenchmarkKind::Load => self.plan().total_requests(),
        }
    }
}
