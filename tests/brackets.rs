use dengue_highlights::data::{Metric, MetricBreakdown, MetricRecord, NestedBreakdown};
use dengue_highlights::highlights::brackets::{
    best_per_category, extremes_by_leading_integer, leading_integer, resolve_extremes,
    BracketExtremes,
};

fn symptoms(entries: &[(&str, f64)]) -> MetricBreakdown {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), MetricRecord::with_percentual(*v)))
        .collect()
}

#[test]
fn leading_integer_parses_bracket_labels() {
    assert_eq!(leading_integer("30-44"), Some(30));
    assert_eq!(leading_integer("60+"), Some(60));
    assert_eq!(leading_integer(" 5-14"), Some(5));
    assert_eq!(leading_integer("<1"), None);
    assert_eq!(leading_integer("ignorado"), None);
}

#[test]
fn youngest_falls_back_to_smallest_leading_integer() {
    let extremes = resolve_extremes(["5-14", "30-44", "60+"]);
    assert_eq!(extremes.youngest.as_deref(), Some("5-14"));
    assert_eq!(extremes.oldest.as_deref(), Some("60+"));
}

#[test]
fn canonical_labels_win_when_present() {
    let extremes = resolve_extremes(["60+", "80+", "0-4"]);
    assert_eq!(extremes.youngest.as_deref(), Some("0-4"));
    assert_eq!(extremes.oldest.as_deref(), Some("60+"));

    let numeric = extremes_by_leading_integer(["60+", "80+", "0-4"]);
    assert_eq!(numeric.oldest.as_deref(), Some("80+"));
}

#[test]
fn unparseable_labels_are_skipped() {
    let extremes = resolve_extremes(["ignorado", "15-29", "45-59"]);
    assert_eq!(extremes.youngest.as_deref(), Some("15-29"));
    assert_eq!(extremes.oldest.as_deref(), Some("45-59"));
    assert_eq!(resolve_extremes(["ignorado"]), BracketExtremes::default());
}

#[test]
fn best_symptom_is_found_for_every_bracket() {
    let mut nested = NestedBreakdown::new();
    nested.insert(
        "0-4".into(),
        symptoms(&[("febre", 80.0), ("exantema", 81.5), ("mialgia", 20.0)]),
    );
    nested.insert("60+".into(), symptoms(&[("mialgia", 0.0), ("febre", 0.0)]));
    nested.insert("ignorado".into(), symptoms(&[("cefaleia", 44.0)]));
    nested.insert("15-29".into(), MetricBreakdown::new());

    let best = best_per_category(&nested, Metric::Percentual);
    assert_eq!(best.len(), 3);
    assert_eq!(best["0-4"].key, "exantema");
    assert_eq!(best["0-4"].value, 81.5);
    assert_eq!(best["60+"].key, "mialgia");
    assert_eq!(best["ignorado"].key, "cefaleia");
    assert!(!best.contains_key("15-29"));
}
