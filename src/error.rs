use std::path::PathBuf;

use thiserror::Error;

/// Errors from the ambient work around the toolbar (config, staging files).
/// The toolbar itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read image {path}: {source}")]
    ImageProbe {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
