use dengue_highlights::data::snapshot::TemporalAnalysis;
use dengue_highlights::highlights::growth::{
    numeric, peak_growth, peak_period, GrowthPoint, TemporalSeries,
};
use serde_json::{json, Value};

#[test]
fn invalid_entries_are_excluded_not_zeroed() {
    let values = vec![json!(5.0), json!("NaN"), json!(-3.0), json!(12.5), Value::Null];
    let series = TemporalSeries::from_values(&values);
    assert_eq!(peak_growth(&series), 12.5);
    assert_eq!(series.invalid_count(), 2);
    assert_eq!(series.len(), 5);
}

#[test]
fn all_invalid_series_reports_zero() {
    let values = vec![json!("NaN"), Value::Null, json!("n/a")];
    let series = TemporalSeries::from_values(&values);
    assert_eq!(peak_growth(&series), 0.0);
    assert!(peak_period(&series).is_none());
    assert_eq!(peak_growth(&TemporalSeries::default()), 0.0);
}

#[test]
fn negative_only_series_keeps_its_maximum() {
    let series = TemporalSeries::from_values(&[json!(-10.0), json!(-2.5), json!("NaN")]);
    assert_eq!(peak_growth(&series), -2.5);
}

#[test]
fn peak_period_is_labelled_by_month() {
    let analysis = TemporalAnalysis {
        meses: vec![json!(1), json!(2), json!(3), json!(4)],
        casos: vec![Some(10), Some(30), Some(30), Some(15)],
        crescimento_percentual: vec![json!(0), json!(200.0), json!(0.0), json!(-50.0)],
    };
    let series = TemporalSeries::from_analysis(&analysis);
    assert_eq!(peak_period(&series), Some(("2", 200.0)));
}

#[test]
fn chronological_order_is_preserved() {
    let series = TemporalSeries::new(vec![
        GrowthPoint {
            period: "jan".into(),
            value: Some(4.0),
        },
        GrowthPoint {
            period: "fev".into(),
            value: None,
        },
        GrowthPoint {
            period: "mar".into(),
            value: Some(4.0),
        },
    ]);
    let periods: Vec<&str> = series.valid().map(|(period, _)| period).collect();
    assert_eq!(periods, vec!["jan", "mar"]);
    assert_eq!(peak_period(&series), Some(("jan", 4.0)));
}

#[test]
fn positions_label_points_beyond_the_month_list() {
    let analysis = TemporalAnalysis {
        meses: vec![json!("jan")],
        casos: vec![],
        crescimento_percentual: vec![json!(1.0), json!(9.0)],
    };
    let series = TemporalSeries::from_analysis(&analysis);
    assert_eq!(peak_period(&series), Some(("2", 9.0)));
}

#[test]
fn only_finite_json_numbers_are_numeric() {
    assert_eq!(numeric(&json!(3)), Some(3.0));
    assert_eq!(numeric(&json!("3")), None);
    assert_eq!(numeric(&Value::Null), None);
    assert_eq!(numeric(&json!([1])), None);
}
