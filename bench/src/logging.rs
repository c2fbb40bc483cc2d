use std::io::Write;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Installs the global subscriber. Logs are flushed when the returned guard is dropped.
pub fn init() -> WorkerGuard {
    let (stdout_writer, guard) = lossless_writer(std::io::stdout());

    Registry::default()
        .with(fmt::layer().with_writer(stdout_writer))
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    guard
}

/// Non-blocking writer that applies backpressure instead of dropping lines when its buffer is full.
fn lossless_writer<W: Write + Send + 'static>(writer: W) -> (NonBlocking, WorkerGuard) {
    NonBlockingBuilder::default().lossy(false).finish(writer)
}
