use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
pub enum BenchmarkKind {
    #[default]
    #[display("Load Thumbnails")]
    #[serde(rename = "load")]
    Load,
    #[display("Generate Expected Thumbnails")]
    #[serde(rename = "generate")]
    Generate,
}
