//! Snapshot model and loading layer.

pub mod loader;
pub mod snapshot;

pub use loader::{load_advanced, load_overview};
pub use snapshot::{
    AdvancedSnapshot, CategoryKey, Dimension, Metric, MetricBreakdown, MetricRecord,
    NestedBreakdown, OverviewSnapshot, SymptomCombination,
};
