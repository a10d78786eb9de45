//! Per-category divergence between two cohorts sharing a key space.

use indexmap::IndexMap;

use crate::{
    data::{snapshot::GenderCounts, Metric, MetricBreakdown, MetricRecord},
    highlights::extremum::argmax,
};

/// Two breakdowns over the same category type, e.g. female vs. male.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortPair {
    pub left: MetricBreakdown,
    pub right: MetricBreakdown,
}

impl CohortPair {
    pub fn new(left: MetricBreakdown, right: MetricBreakdown) -> Self {
        Self { left, right }
    }

    /// Transpose `bracket -> {feminino, masculino}` counts into a
    /// female/male pair of bracket breakdowns. A side with no count for a
    /// bracket simply lacks that key.
    pub fn from_gender_counts(split: &IndexMap<String, GenderCounts>) -> Self {
        let mut left = MetricBreakdown::new();
        let mut right = MetricBreakdown::new();
        for (key, counts) in split {
            if let Some(feminino) = counts.feminino {
                left.insert(key.clone(), MetricRecord::with_casos(feminino));
            }
            if let Some(masculino) = counts.masculino {
                right.insert(key.clone(), MetricRecord::with_casos(masculino));
            }
        }
        Self { left, right }
    }

    pub fn largest_divergence(&self, metric: Metric) -> Option<Divergence> {
        largest_divergence(&self.left, &self.right, metric)
    }
}

/// Category with the widest gap between cohorts.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub key: String,
    pub magnitude: f64,
}

/// Absolute difference of `metric` for every key present on both sides, in
/// the left cohort's order.
pub fn differences<'a>(
    left: &'a MetricBreakdown,
    right: &'a MetricBreakdown,
    metric: Metric,
) -> impl Iterator<Item = (&'a str, f64)> + 'a {
    left.iter().filter_map(move |(key, record)| {
        right
            .get(key.as_str())
            .map(|other| (key.as_str(), (record.value(metric) - other.value(metric)).abs()))
    })
}

/// Shared key with the largest absolute difference. With no positive gap the
/// first shared key wins at zero; with no shared key at all, `None`.
pub fn largest_divergence(
    left: &MetricBreakdown,
    right: &MetricBreakdown,
    metric: Metric,
) -> Option<Divergence> {
    argmax(differences(left, right, metric)).map(|winner| Divergence {
        key: winner.key_owned(),
        magnitude: winner.value,
    })
}
