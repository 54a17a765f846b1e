//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The state file could not be read or written.
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file exists but is not a JSON object.
    #[error("state file {} is corrupt", .path.display())]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value does not have the expected shape.
    #[error("stored value for '{key}' is corrupt")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be turned into JSON.
    #[error("failed to serialize '{key}'")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
