use clap::Parser;
use figlet_rs::FIGfont;
use media_bench::args::common::MediaBenchArgs;
use media_bench::error::BenchError;
use media_bench::logging;
use media_bench::runner::BenchmarkRunner;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), BenchError> {
    let args = MediaBenchArgs::parse();
    let _guard = logging::init();

    if let Ok(font) = FIGfont::standard() {
        if let Some(figure) = font.convert("Media Bench") {
            println!("{figure}");
        }
    }

    info!("Starting the benchmarks...");
    BenchmarkRunner::new(args).run().await?;
    info!("Finished the benchmarks.");
    Ok(())
}
