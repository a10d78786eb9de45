//! Error taxonomy for snapshot loading.
//!
//! Only a failed snapshot load is fatal. Missing dimensions, missing metrics
//! and non-numeric growth entries are absorbed by the analyzers and replaced
//! with their documented defaults, so they never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// The aggregate snapshot could not be produced for this request.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot file {} does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {} is not valid aggregate JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    /// Path of the snapshot that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Missing { path } | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
