//! Runtime configuration utilities for dengue-highlights.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder holding the aggregate snapshots.
    pub data_dir: PathBuf,
    /// Multi-dimensional snapshot file name (or absolute path).
    pub advanced_file: PathBuf,
    /// National overview snapshot file name (or absolute path).
    pub overview_file: PathBuf,
    /// Default bind address for `serve`.
    pub host: String,
    /// Default port for `serve`.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            advanced_file: PathBuf::from("dengue_advanced_statistics.json"),
            overview_file: PathBuf::from("dengue_statistics.json"),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let advanced_file = env::var("ADVANCED_STATS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.advanced_file);
        let overview_file = env::var("STATS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.overview_file);
        let host = env::var("BIND_HOST").unwrap_or(defaults.host);
        let port = env::var("BIND_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        Ok(Self {
            data_dir,
            advanced_file,
            overview_file,
            host,
            port,
        })
    }

    /// Settings rooted at `data_dir`, with default file names.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Location of the advanced snapshot.
    pub fn advanced_path(&self) -> PathBuf {
        self.join_data(&self.advanced_file)
    }

    /// Location of the overview snapshot.
    pub fn overview_path(&self) -> PathBuf {
        self.join_data(&self.overview_file)
    }
}
