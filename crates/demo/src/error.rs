//! Demo error types.

use thiserror::Error;

/// Errors that can stop the demo binary.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The Prometheus recorder could not be installed.
    #[error("failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// A section task panicked or was cancelled.
    #[error("demo section did not finish: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The JSON report could not be encoded.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
