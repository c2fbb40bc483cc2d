/// Outcome of a single thumbnail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestRecord {
    Completed { latency_ms: u64, corrupted: bool },
    Failed,
}

impl RequestRecord {
    pub fn completed(latency_ms: u64) -> Self {
        RequestRecord::Completed {
            latency_ms,
            corrupted: false,
        }
    }

    pub fn corrupted(latency_ms: u64) -> Self {
        RequestRecord::Completed {
            latency_ms,
            corrupted: true,
        }
    }
}
