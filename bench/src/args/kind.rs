use super::defaults::*;
use super::simple::BenchmarkKind;
use super::thumbnail::ThumbnailParams;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum BenchmarkKindCommand {
    /// Download one thumbnail per media item and store it as the expected reference
    Generate(GenerateArgs),

    /// Request thumbnails concurrently and report latency statistics
    Load(LoadArgs),
}

impl BenchmarkKindCommand {
    pub fn as_simple_kind(&self) -> BenchmarkKind {
        match self {
            BenchmarkKindCommand::Generate(_) => BenchmarkKind::Generate,
            BenchmarkKindCommand::Load(_) => BenchmarkKind::Load,
        }
    }
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub thumbnail: ThumbnailParams,

    /// Directory where reference thumbnails are written
    #[arg(long, short = 'x', default_value = DEFAULT_EXPECTED_THUMBNAILS_DIR)]
    pub expected_dir: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("thumbnail_overrides")
        .args(["width", "height", "method", "animated"])
        .multiple(true)
        .requires("validate")
))]
pub struct LoadArgs {
    /// Request explicit thumbnail parameters and compare each response with its reference file
    #[arg(long, default_value_t = false)]
    pub validate: bool,

    /// Thumbnail parameters, only accepted together with `--validate`
    #[command(flatten)]
    pub thumbnail: ThumbnailParams,

    /// Directory holding reference thumbnails, used when validating
    #[arg(long, short = 'x', default_value = DEFAULT_EXPECTED_THUMBNAILS_DIR)]
    pub expected_dir: PathBuf,

    /// Directory where the JSON report is written
    #[arg(long, short = 'o', default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,
}
