//! Period-over-period growth peaks.

use serde_json::Value;

use crate::{data::snapshot::TemporalAnalysis, highlights::extremum::argmax};

/// One period of a growth series; `value` is `None` when the upstream entry
/// was not a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPoint {
    pub period: String,
    pub value: Option<f64>,
}

/// Chronologically ordered growth values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalSeries {
    points: Vec<GrowthPoint>,
}

impl TemporalSeries {
    pub fn new(points: Vec<GrowthPoint>) -> Self {
        Self { points }
    }

    /// Series over raw JSON entries, labelled by 1-based position.
    pub fn from_values(values: &[Value]) -> Self {
        Self::labelled(values, &[])
    }

    /// Series over an analysis block; months label the points, falling back
    /// to position when the month list is shorter than the growth list.
    pub fn from_analysis(analysis: &TemporalAnalysis) -> Self {
        Self::labelled(&analysis.crescimento_percentual, &analysis.meses)
    }

    fn labelled(values: &[Value], periods: &[Value]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(idx, raw)| GrowthPoint {
                period: periods
                    .get(idx)
                    .map(period_label)
                    .unwrap_or_else(|| (idx + 1).to_string()),
                value: numeric(raw),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Well-defined entries only, in chronological order.
    pub fn valid(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|v| (p.period.as_str(), v)))
    }

    /// Number of entries dropped as non-numeric.
    pub fn invalid_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_none()).count()
    }
}

/// A JSON entry counts as numeric only when it is a finite number.
pub fn numeric(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Largest valid growth value, or `0.0` when the series has none.
pub fn peak_growth(series: &TemporalSeries) -> f64 {
    peak_period(series).map(|(_, value)| value).unwrap_or(0.0)
}

/// Period holding the largest valid growth value; earliest wins on ties.
pub fn peak_period(series: &TemporalSeries) -> Option<(&str, f64)> {
    argmax(series.valid()).map(|winner| (winner.key, winner.value))
}

fn period_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
