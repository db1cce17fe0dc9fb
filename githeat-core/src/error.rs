//! Error types for githeat-core

use thiserror::Error;

/// Main error type for the githeat-core library
///
/// The analytics engine itself never fails; only loading snapshots and
/// configuration can.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Snapshot is structurally unusable (e.g. neither days nor cells)
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for githeat-core
pub type Result<T> = std::result::Result<T, Error>;
