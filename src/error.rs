use thiserror::Error;

/// Failures at the edges: reading the counter source, config and export files.
/// Building funnels from a record never fails.
#[derive(Error, Debug)]
pub enum FunnelError {
    #[error("I/O error on counter source or export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed counter CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad configuration: {0}")]
    Config(String),
}

pub type FvResult<T> = Result<T, FunnelError>;
