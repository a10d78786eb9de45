use dengue_highlights::data::{
    snapshot::GenderCounts, Metric, MetricBreakdown, MetricRecord,
};
use dengue_highlights::highlights::differential::{
    differences, largest_divergence, CohortPair,
};
use indexmap::IndexMap;

fn counts(entries: &[(&str, u64)]) -> MetricBreakdown {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), MetricRecord::with_casos(*v)))
        .collect()
}

fn shares(entries: &[(&str, f64)]) -> MetricBreakdown {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), MetricRecord::with_percentual(*v)))
        .collect()
}

#[test]
fn single_shared_bracket_reports_its_gap() {
    let pair = CohortPair::new(counts(&[("0-4", 10)]), counts(&[("0-4", 4)]));
    let divergence = pair.largest_divergence(Metric::Casos).unwrap();
    assert_eq!(divergence.key, "0-4");
    assert_eq!(divergence.magnitude, 6.0);
}

#[test]
fn keys_on_one_side_only_are_ignored() {
    let female = counts(&[("0-4", 10), ("60+", 500)]);
    let male = counts(&[("0-4", 4), ("15-29", 900)]);
    let gaps: Vec<_> = differences(&female, &male, Metric::Casos).collect();
    assert_eq!(gaps, vec![("0-4", 6.0)]);
    let divergence = largest_divergence(&female, &male, Metric::Casos).unwrap();
    assert_eq!(divergence.key, "0-4");
}

#[test]
fn no_overlap_is_unavailable() {
    let female = counts(&[("0-4", 10)]);
    let male = counts(&[("5-14", 10)]);
    assert!(largest_divergence(&female, &male, Metric::Casos).is_none());
    assert!(largest_divergence(&MetricBreakdown::new(), &male, Metric::Casos).is_none());
}

#[test]
fn equal_cohorts_yield_first_shared_key_at_zero() {
    let female = counts(&[("5-14", 3), ("0-4", 8)]);
    let male = counts(&[("0-4", 8), ("5-14", 3)]);
    let divergence = largest_divergence(&female, &male, Metric::Casos).unwrap();
    assert_eq!(divergence.key, "5-14");
    assert_eq!(divergence.magnitude, 0.0);
}

#[test]
fn percentage_pass_is_independent_of_counts() {
    let mut female = shares(&[("febre", 90.0), ("mialgia", 70.0)]);
    let mut male = shares(&[("febre", 88.0), ("mialgia", 61.5)]);
    female.get_mut("febre").unwrap().casos = Some(100_000);
    male.get_mut("febre").unwrap().casos = Some(10);

    let by_share = largest_divergence(&female, &male, Metric::Percentual).unwrap();
    assert_eq!(by_share.key, "mialgia");
    assert!((by_share.magnitude - 8.5).abs() < 1e-9);

    let by_count = largest_divergence(&female, &male, Metric::Casos).unwrap();
    assert_eq!(by_count.key, "febre");
}

#[test]
fn gender_split_is_transposed_into_cohorts() {
    let mut split = IndexMap::new();
    split.insert(
        "0-4".to_string(),
        GenderCounts {
            feminino: Some(10),
            masculino: Some(4),
        },
    );
    split.insert(
        "60+".to_string(),
        GenderCounts {
            feminino: Some(50),
            masculino: None,
        },
    );
    let pair = CohortPair::from_gender_counts(&split);
    assert_eq!(pair.left.len(), 2);
    assert_eq!(pair.right.len(), 1);
    let divergence = pair.largest_divergence(Metric::Casos).unwrap();
    assert_eq!(divergence.key, "0-4");
    assert_eq!(divergence.magnitude, 6.0);
}
