use dengue_highlights::data::{Metric, MetricBreakdown, MetricRecord};
use dengue_highlights::highlights::axis::{project, CanonicalAxis, AGE_BRACKETS};
use proptest::prelude::*;

fn record(casos: u64, letalidade: f64) -> MetricRecord {
    MetricRecord {
        casos: Some(casos),
        letalidade: Some(letalidade),
        ..MetricRecord::default()
    }
}

#[test]
fn projection_follows_axis_order_and_skips_absent_keys() {
    let mut breakdown = MetricBreakdown::new();
    breakdown.insert("60+".into(), record(40, 3.0));
    breakdown.insert("unknown".into(), record(999, 9.0));
    breakdown.insert("0-4".into(), record(100, 0.5));
    breakdown.insert("30-44".into(), record(70, 0.1));

    let projection = project(
        &breakdown,
        &CanonicalAxis::age_brackets(),
        &[Metric::Casos, Metric::Letalidade],
    );
    assert_eq!(projection.categories, vec!["0-4", "30-44", "60+"]);
    assert_eq!(projection.counts(Metric::Casos), vec![100, 70, 40]);
    assert_eq!(projection.column(Metric::Letalidade), &[0.5, 0.1, 3.0]);
    assert!(projection.column(Metric::Obitos).is_empty());
}

#[test]
fn empty_breakdown_projects_to_empty_columns() {
    let projection = project(
        &MetricBreakdown::new(),
        &CanonicalAxis::age_brackets(),
        &Metric::ALL,
    );
    assert!(projection.is_empty());
    for metric in Metric::ALL {
        assert!(projection.column(metric).is_empty());
    }
}

#[test]
fn missing_metric_reads_as_zero() {
    let mut breakdown = MetricBreakdown::new();
    breakdown.insert("5-14".into(), MetricRecord::with_casos(3));
    let projection = project(&breakdown, &CanonicalAxis::age_brackets(), &[Metric::Obitos]);
    assert_eq!(projection.column(Metric::Obitos), &[0.0]);
}

#[test]
fn axis_deduplicates_and_arranges_foreign_keys_last() {
    let axis = CanonicalAxis::new(["b", "a", "b"]);
    assert_eq!(axis.keys(), &["b".to_string(), "a".to_string()]);
    assert_eq!(axis.arrange(["x", "a", "b"]), vec!["b", "a", "x"]);
}

proptest! {
    #[test]
    fn projection_is_bounded_by_axis_and_keys(
        keys in prop::collection::hash_set(prop::sample::select(vec![
            "0-4", "5-14", "15-29", "30-44", "45-59", "60+", "80+", "ignorado",
        ]), 0..5),
        casos in 0u64..10_000,
    ) {
        let breakdown: MetricBreakdown = keys
            .iter()
            .map(|k| (k.to_string(), MetricRecord::with_casos(casos)))
            .collect();
        let axis = CanonicalAxis::age_brackets();
        let projection = project(&breakdown, &axis, &[Metric::Casos]);
        prop_assert!(projection.len() <= AGE_BRACKETS.len());
        prop_assert_eq!(projection.column(Metric::Casos).len(), projection.len());
        for category in &projection.categories {
            prop_assert!(axis.contains(category));
            prop_assert!(breakdown.contains_key(category));
        }
    }
}
