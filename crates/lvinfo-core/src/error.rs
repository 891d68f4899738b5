use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create output file {}: {source}", path.display())]
    OutputCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read levels from {}: {source}", path.display())]
    LevelsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to roll level table back to byte {offset}: {source}")]
    RollbackFailed {
        offset: u64,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
