use std::fs;

use dengue_highlights::{
    data::{load_advanced, load_overview, Dimension, Metric},
    SnapshotError,
};
use tempfile::tempdir;

#[test]
fn missing_file_is_reported_as_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_advanced(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Missing { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"faixa_etaria\": ").unwrap();
    let err = load_advanced(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Parse { .. }));
}

#[test]
fn absent_dimensions_load_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(
        &path,
        r#"{"faixa_etaria": {"0-4": {"casos": 7, "obitos": "n/a", "letalidade": null}}}"#,
    )
    .unwrap();
    let snapshot = load_advanced(&path).unwrap();
    assert_eq!(snapshot.dimensions(), vec![Dimension::FaixaEtaria]);
    let record = &snapshot.faixa_etaria["0-4"];
    assert_eq!(record.value(Metric::Casos), 7.0);
    assert_eq!(record.value(Metric::Obitos), 0.0);
    assert_eq!(record.value(Metric::Letalidade), 0.0);
}

#[test]
fn overview_snapshot_loads_parallel_sequences() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overview.json");
    fs::write(&path, r#"{"por_ano": {"anos": [2023], "casos": [12]}}"#).unwrap();
    let snapshot = load_overview(&path).unwrap();
    assert_eq!(snapshot.por_ano.year(0), Some(2023));
    assert_eq!(snapshot.por_ano.casos, vec![Some(12)]);
    assert!(snapshot.sintomas.is_empty());
}

#[test]
fn malformed_array_cells_do_not_fail_the_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cells.json");
    fs::write(
        &path,
        r#"{
            "faixa_etaria": {"0-4": {"casos": 7}},
            "santa_catarina": {
                "municipios": {"codigos": ["420460", 420820], "casos": [null, 12]},
                "analise_temporal": {"meses": [1], "casos": ["x"], "crescimento_percentual": [1.0]}
            }
        }"#,
    )
    .unwrap();
    let snapshot = load_advanced(&path).unwrap();
    assert_eq!(snapshot.faixa_etaria["0-4"].casos(), 7);
    let municipios = &snapshot.santa_catarina.municipios;
    assert_eq!(municipios.codigos, vec!["420460", "420820"]);
    assert_eq!(municipios.casos, vec![None, Some(12)]);
    let analysis = snapshot.santa_catarina.analise_temporal.as_ref().unwrap();
    assert_eq!(analysis.casos, vec![None]);
}

#[test]
fn overview_cells_tolerate_nulls_and_float_years() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overview_cells.json");
    fs::write(
        &path,
        r#"{
            "por_estado": {"uf": [42], "casos": ["many"], "percentual": [null]},
            "por_ano": {"anos": [2024.0, "2023", 2022.5], "casos": [3, 4, 5]}
        }"#,
    )
    .unwrap();
    let snapshot = load_overview(&path).unwrap();
    assert_eq!(snapshot.por_estado.uf, vec!["42"]);
    assert_eq!(snapshot.por_estado.casos, vec![None]);
    assert_eq!(snapshot.por_estado.percentual, vec![None]);
    assert_eq!(snapshot.por_ano.year(0), Some(2024));
    assert_eq!(snapshot.por_ano.year(1), None);
    assert_eq!(snapshot.por_ano.year(2), None);
}

#[test]
fn both_share_keys_on_one_record_still_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shares.json");
    fs::write(
        &path,
        r#"{"faixa_etaria": {
            "0-4": {"percentual": 12.5, "percentual_do_total": 11.0},
            "60+": {"percentual_do_total": 4.0}
        }}"#,
    )
    .unwrap();
    let snapshot = load_advanced(&path).unwrap();
    assert_eq!(snapshot.faixa_etaria["0-4"].value(Metric::Percentual), 12.5);
    assert_eq!(snapshot.faixa_etaria["60+"].value(Metric::Percentual), 4.0);
}
