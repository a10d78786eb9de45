//! Snapshot loading. Each call reads the file afresh; nothing is cached.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    data::snapshot::{AdvancedSnapshot, OverviewSnapshot},
    error::SnapshotError,
};

/// Load the multi-dimensional snapshot used by the advanced views.
#[instrument(level = "debug")]
pub fn load_advanced(path: &Path) -> Result<AdvancedSnapshot, SnapshotError> {
    let snapshot: AdvancedSnapshot = load_json(path)?;
    debug!(dimensions = ?snapshot.dimensions(), "loaded advanced snapshot");
    Ok(snapshot)
}

/// Load the national overview snapshot.
#[instrument(level = "debug")]
pub fn load_overview(path: &Path) -> Result<OverviewSnapshot, SnapshotError> {
    load_json(path)
}

/// Parse an already-read snapshot body; `origin` is only used in errors.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8], origin: &Path) -> Result<T, SnapshotError> {
    serde_json::from_slice(bytes).map_err(|source| SnapshotError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read snapshot");
    parse_json(&bytes, path)
}
