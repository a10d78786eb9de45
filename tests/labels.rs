use dengue_highlights::data::SymptomCombination;
use dengue_highlights::highlights::symptoms::{display_label, is_ranked, top_combination};
use proptest::prelude::*;

#[test]
fn known_codes_map_to_display_labels() {
    insta::assert_snapshot!(display_label("mialgia"), @"Dor Muscular");
    insta::assert_snapshot!(display_label("CEFALEIA"), @"DOR DE CABEÇA");
    insta::assert_snapshot!(display_label("vomito"), @"Vômito");
}

#[test]
fn case_insensitive_match_follows_input_casing() {
    assert_eq!(display_label("Exantema"), "Manchas na Pele");
    assert_eq!(display_label("NaUsEa"), "Náusea");
    assert_eq!(display_label("DOR_COSTAS"), "DOR NAS COSTAS");
}

#[test]
fn unmapped_codes_are_capitalised() {
    assert_eq!(display_label("xyz"), "Xyz");
    assert_eq!(display_label("PETEQUIAS"), "Petequias");
    assert_eq!(display_label(""), "");
}

#[test]
fn labels_are_stable_under_relabelling() {
    for code in ["mialgia", "MIALGIA", "Cefaleia", "nausea", "VOMITO", "xyz", "LEUCOPENIA"] {
        let once = display_label(code);
        assert_eq!(display_label(&once), once, "code {code}");
    }
}

fn combo(sintomas: &[&str], percentual: f64) -> SymptomCombination {
    SymptomCombination {
        sintomas: sintomas.iter().map(|s| s.to_string()).collect(),
        casos: None,
        percentual: Some(percentual),
    }
}

#[test]
fn top_combination_takes_the_head_of_a_ranked_list() {
    let list = vec![
        combo(&["febre", "cefaleia"], 61.0),
        combo(&["febre", "mialgia"], 58.2),
    ];
    assert!(is_ranked(&list));
    assert_eq!(top_combination(Some(list.as_slice())), vec!["febre", "cefaleia"]);
}

#[test]
fn top_combination_of_nothing_is_empty() {
    assert!(top_combination(None).is_empty());
    assert!(top_combination(Some(&[][..])).is_empty());
}

#[test]
fn unranked_list_falls_back_to_highest_share() {
    let list = vec![
        combo(&["febre", "nausea"], 12.0),
        combo(&["febre", "mialgia"], 58.2),
        combo(&["cefaleia", "mialgia"], 58.2),
    ];
    assert!(!is_ranked(&list));
    assert_eq!(top_combination(Some(list.as_slice())), vec!["febre", "mialgia"]);
}

#[test]
fn expanding_first_letter_is_left_alone() {
    let once = display_label("ßa");
    assert_eq!(once, "ßa");
    assert_eq!(display_label(&once), once);
    assert_eq!(display_label("SSa"), "Ssa");
}

proptest! {
    #[test]
    fn relabelling_is_idempotent(code in "\\PC{0,16}") {
        let once = display_label(&code);
        prop_assert_eq!(display_label(&once), once);
    }

    #[test]
    fn upper_case_known_codes_stay_upper_case(
        code in prop::sample::select(vec!["mialgia", "cefaleia", "exantema", "febre", "vomito", "nausea"])
    ) {
        let label = display_label(&code.to_uppercase());
        prop_assert_eq!(label.to_uppercase(), label);
    }
}
