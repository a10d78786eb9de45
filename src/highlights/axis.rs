//! Re-projection of unordered breakdowns onto a fixed category axis.

use crate::data::{Metric, MetricBreakdown};

/// Age brackets in display order.
pub const AGE_BRACKETS: [&str; 6] = ["0-4", "5-14", "15-29", "30-44", "45-59", "60+"];

/// Ordered, duplicate-free sequence of category keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAxis {
    keys: Vec<String>,
}

impl CanonicalAxis {
    /// Build an axis; repeated keys keep their first position.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !out.contains(&key) {
                out.push(key);
            }
        }
        Self { keys: out }
    }

    pub fn age_brackets() -> Self {
        Self::new(AGE_BRACKETS)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Arrange `keys` so that axis members come first in axis order, followed
    /// by the remaining keys in their original order.
    pub fn arrange<'a, I>(&self, keys: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        let mut out: Vec<&str> = Vec::with_capacity(keys.len());
        for axis_key in &self.keys {
            if let Some(key) = keys.iter().find(|k| **k == axis_key.as_str()) {
                out.push(*key);
            }
        }
        out.extend(keys.iter().copied().filter(|k| !self.contains(k)));
        out
    }

    /// Axis keys with no entry in `breakdown`, in axis order.
    pub fn missing_from<'a>(&'a self, breakdown: &MetricBreakdown) -> Vec<&'a str> {
        self.keys
            .iter()
            .filter(|key| !breakdown.contains_key(key.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Axis-aligned categories with one value column per requested metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub categories: Vec<String>,
    columns: Vec<(Metric, Vec<f64>)>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Values of `metric`; empty when the metric was not requested.
    pub fn column(&self, metric: Metric) -> &[f64] {
        self.columns
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Column of a count metric, as integers.
    pub fn counts(&self, metric: Metric) -> Vec<u64> {
        self.column(metric).iter().map(|v| *v as u64).collect()
    }

    /// `(category, value)` pairs of one column, in axis order.
    pub fn entries(&self, metric: Metric) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.column(metric).iter().copied())
    }
}

/// Project `breakdown` onto `axis`. Axis keys absent from the breakdown are
/// skipped, never zero-filled; breakdown keys outside the axis never appear.
pub fn project(breakdown: &MetricBreakdown, axis: &CanonicalAxis, metrics: &[Metric]) -> Projection {
    let mut categories = Vec::new();
    let mut columns: Vec<(Metric, Vec<f64>)> =
        metrics.iter().map(|m| (*m, Vec::new())).collect();
    for key in axis.keys() {
        let Some(record) = breakdown.get(key.as_str()) else {
            continue;
        };
        categories.push(key.clone());
        for (metric, values) in columns.iter_mut() {
            values.push(record.value(*metric));
        }
    }
    Projection {
        categories,
        columns,
    }
}
