use derive_new::new;
use serde::{Deserialize, Serialize};

/// Aggregate statistics of a load run without the raw latency samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, new)]
pub struct ThumbnailBenchmarkSummary {
    pub failed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrupted: Option<u64>,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub mean: Option<f64>,
    pub median: Option<u64>,
    pub count: u64,
}
