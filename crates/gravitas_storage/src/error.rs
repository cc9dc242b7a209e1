use thiserror::Error;

/// Errors from encoding, decoding and persisting simulator state
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// The policy or termination condition is not one the codec knows how
    /// to describe
    #[error("no encoding for '{name}'")]
    UnregisteredPolicy { name: String },
    /// JSON has no representation for infinities or NaN
    #[error("cannot encode non-finite value in {field}")]
    NonFinite { field: String },
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
