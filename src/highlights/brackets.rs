//! Per-bracket dominant sub-metric and youngest/oldest bracket resolution.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::{
    data::{Metric, NestedBreakdown},
    highlights::extremum::argmax_metric,
};

/// Bracket expected to hold the youngest patients.
pub const YOUNGEST_BRACKET: &str = "0-4";
/// Bracket expected to hold the oldest patients.
pub const OLDEST_BRACKET: &str = "60+";

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)").expect("valid leading integer pattern"));

/// Dominant inner key of one outer category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestEntry {
    pub key: String,
    pub value: f64,
}

/// Inner key with the largest `metric` for every outer category. Outer
/// categories with an empty inner breakdown have no entry.
pub fn best_per_category(nested: &NestedBreakdown, metric: Metric) -> IndexMap<String, BestEntry> {
    nested
        .iter()
        .filter_map(|(outer, inner)| {
            argmax_metric(inner, metric).map(|winner| {
                (
                    outer.clone(),
                    BestEntry {
                        key: winner.key_owned(),
                        value: winner.value,
                    },
                )
            })
        })
        .collect()
}

/// Leading integer of a bracket label: `"30-44"` is 30, `"60+"` is 60.
pub fn leading_integer(label: &str) -> Option<u32> {
    LEADING_INTEGER
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Youngest and oldest brackets of a label set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BracketExtremes {
    pub youngest: Option<String>,
    pub oldest: Option<String>,
}

/// Resolve youngest/oldest by leading integer alone. Labels without one are
/// ignored; the first label wins on ties.
pub fn extremes_by_leading_integer<'a, I>(labels: I) -> BracketExtremes
where
    I: IntoIterator<Item = &'a str>,
{
    let mut youngest: Option<(&str, u32)> = None;
    let mut oldest: Option<(&str, u32)> = None;
    for label in labels {
        let Some(age) = leading_integer(label) else {
            continue;
        };
        if youngest.map_or(true, |(_, best)| age < best) {
            youngest = Some((label, age));
        }
        if oldest.map_or(true, |(_, best)| age > best) {
            oldest = Some((label, age));
        }
    }
    BracketExtremes {
        youngest: youngest.map(|(label, _)| label.to_string()),
        oldest: oldest.map(|(label, _)| label.to_string()),
    }
}

/// Resolve youngest/oldest, preferring [`YOUNGEST_BRACKET`] and
/// [`OLDEST_BRACKET`] when present and substituting the leading-integer
/// resolution when they are not.
pub fn resolve_extremes<'a, I>(labels: I) -> BracketExtremes
where
    I: IntoIterator<Item = &'a str>,
{
    let labels: Vec<&str> = labels.into_iter().collect();
    let resolved = extremes_by_leading_integer(labels.iter().copied());
    let pick = |canonical: &str, fallback: Option<String>| {
        if labels.contains(&canonical) {
            Some(canonical.to_string())
        } else {
            fallback
        }
    };
    BracketExtremes {
        youngest: pick(YOUNGEST_BRACKET, resolved.youngest),
        oldest: pick(OLDEST_BRACKET, resolved.oldest),
    }
}
