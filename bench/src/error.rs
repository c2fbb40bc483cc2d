use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid media identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Cannot parse URL: {0}")]
    CannotParseUrl(String),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("Cannot read thumbnails file {}", .path.display())]
    CannotReadThumbnailsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse thumbnails file")]
    CannotParseThumbnailsFile(#[from] serde_json::Error),
    #[error("Missing reference thumbnail {}", .path.display())]
    MissingReference {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write to file")]
    CannotWriteToFile(#[from] std::io::Error),
    #[error("{failed} of {total} expected thumbnail downloads failed")]
    GenerationFailed { failed: usize, total: usize },
}
