use std::path::PathBuf;
use thiserror::Error;

/// Failures of the key-value persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium refused the operation (missing, disabled, over quota)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
