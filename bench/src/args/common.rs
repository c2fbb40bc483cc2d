use super::defaults::*;
use super::kind::BenchmarkKindCommand;
use super::simple::BenchmarkKind;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct MediaBenchArgs {
    /// Benchmark kind
    #[command(subcommand)]
    pub benchmark_kind: BenchmarkKindCommand,

    /// Base URL of the media server
    #[arg(long, short = 't', global = true, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// JSON file mapping media identifiers to request counts
    #[arg(long, short = 'i', global = true, default_value = DEFAULT_THUMBNAILS_FILE)]
    pub thumbnails: PathBuf,
}

impl MediaBenchArgs {
    pub fn kind(&self) -> BenchmarkKind {
        self.benchmark_kind.as_simple_kind()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn thumbnails(&self) -> &Path {
        &self.thumbnails
    }
}
