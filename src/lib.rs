//! Highlight extraction and derived statistics over pre-aggregated dengue
//! surveillance snapshots.
//!
//! [`data`] models and loads the snapshots, [`highlights`] holds the pure
//! reductions (axis projection, argmax/argmin, cohort divergence, growth
//! peaks, symptom labels, per-bracket winners) and [`reports`] assembles them
//! into the per-view result objects served by [`api`] and printed by [`cli`].

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod highlights;
pub mod logging;
pub mod reports;

pub use error::SnapshotError;
