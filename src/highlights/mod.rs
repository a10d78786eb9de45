//! Highlight extraction over pre-aggregated breakdowns.
//!
//! Every function here is pure: it reads a slice of an immutable snapshot and
//! returns owned results, so calls can run in any order or concurrently.

pub mod axis;
pub mod brackets;
pub mod differential;
pub mod extremum;
pub mod growth;
pub mod symptoms;

pub use axis::{project, CanonicalAxis, Projection, AGE_BRACKETS};
pub use brackets::{best_per_category, leading_integer, resolve_extremes, BestEntry, BracketExtremes};
pub use differential::{largest_divergence, CohortPair, Divergence};
pub use extremum::{argmax, argmin, Extremum};
pub use growth::{peak_growth, peak_period, TemporalSeries};
pub use symptoms::{display_label, top_combination};
