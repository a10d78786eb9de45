//! Argmax/argmin over `(category, value)` sequences.
//!
//! The first occurrence wins on ties, zero is an ordinary candidate, and NaN
//! values never win. An empty input yields `None`, the "unavailable" sentinel.

use crate::data::{Metric, MetricBreakdown};

/// Winning entry of an extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<'a> {
    /// Position of the winner in iteration order.
    pub index: usize,
    pub key: &'a str,
    pub value: f64,
}

impl Extremum<'_> {
    pub fn key_owned(&self) -> String {
        self.key.to_string()
    }
}

/// Category with the largest value.
pub fn argmax<'a, I>(entries: I) -> Option<Extremum<'a>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    select(entries, |candidate, best| candidate > best)
}

/// Category with the smallest value.
pub fn argmin<'a, I>(entries: I) -> Option<Extremum<'a>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    select(entries, |candidate, best| candidate < best)
}

/// [`argmax`] over one metric of a breakdown, in insertion order.
pub fn argmax_metric(breakdown: &MetricBreakdown, metric: Metric) -> Option<Extremum<'_>> {
    argmax(
        breakdown
            .iter()
            .map(|(key, record)| (key.as_str(), record.value(metric))),
    )
}

fn select<'a, I, F>(entries: I, beats: F) -> Option<Extremum<'a>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<Extremum<'a>> = None;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        let replace = match best {
            Some(current) => beats(value, current.value),
            None => true,
        };
        if replace {
            best = Some(Extremum { index, key, value });
        }
    }
    best
}
