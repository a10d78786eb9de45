//! Per-view result objects: chart-ready columns plus a `destaques` block.
//!
//! Builders take an already-loaded snapshot and never fail; a missing
//! dimension yields an empty report with `dados_disponiveis = false`.

pub mod age;
pub mod coverage;
pub mod gender;
pub mod names;
pub mod overview;
pub mod profile;
pub mod state;

pub use age::{age_brackets, AgeBracketReport};
pub use coverage::{coverage, CoverageReport};
pub use gender::{gender, GenderReport};
pub use overview::{states, symptom_ranking, years, StatesReport, SymptomRanking, YearsReport};
pub use profile::{symptom_profile, SymptomProfileReport};
pub use state::{santa_catarina, StateReport};
