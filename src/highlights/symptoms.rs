//! Symptom combination ranking and display labels.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::{data::SymptomCombination, highlights::extremum::argmax};

/// Internal symptom codes and their public-facing labels.
const SYMPTOM_LABELS: &[(&str, &str)] = &[
    ("mialgia", "Dor Muscular"),
    ("cefaleia", "Dor de Cabeça"),
    ("exantema", "Manchas na Pele"),
    ("febre", "Febre"),
    ("vomito", "Vômito"),
    ("nausea", "Náusea"),
    ("artralgia", "Dor nas Articulações"),
    ("dor_costas", "Dor nas Costas"),
    ("dor_retro", "Dor Atrás dos Olhos"),
];

struct LabelTable {
    /// Case-sensitive forms: lower-case code and its upper-case twin.
    exact: HashMap<String, String>,
    /// Lower-cased codes and labels, each pointing at the canonical label.
    folded: HashMap<String, &'static str>,
}

static LABELS: Lazy<LabelTable> = Lazy::new(|| {
    let mut exact = HashMap::new();
    let mut folded = HashMap::new();
    for (code, label) in SYMPTOM_LABELS {
        exact.insert((*code).to_string(), (*label).to_string());
        exact.insert(code.to_uppercase(), label.to_uppercase());
        folded.insert(code.to_lowercase(), *label);
        // Labels resolve to themselves so that relabelling is a no-op.
        folded.insert(label.to_lowercase(), *label);
    }
    LabelTable { exact, folded }
});

/// Display label for a symptom code.
///
/// Exact matches come first, then a case-insensitive match whose casing
/// follows the input (all upper-case input gives an upper-case label).
/// Unknown codes are capitalised: first character upper, the rest lower.
pub fn display_label(code: &str) -> String {
    if let Some(label) = LABELS.exact.get(code) {
        return label.clone();
    }
    if let Some(label) = LABELS.folded.get(&code.to_lowercase()) {
        if is_upper_case(code) {
            return label.to_uppercase();
        }
        return (*label).to_string();
    }
    capitalize(code)
}

/// Whether `code` is one of the known symptom codes, in any casing.
pub fn is_known_code(code: &str) -> bool {
    let folded = code.to_lowercase();
    SYMPTOM_LABELS.iter().any(|(known, _)| *known == folded)
}

fn is_upper_case(text: &str) -> bool {
    text == text.to_uppercase()
}

/// First character upper-cased, the rest lower-cased. A first character
/// whose upper-case form spans several characters (`ß`) is kept as is, so
/// that capitalising twice gives the same text.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head)
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

/// Whether the list is ordered by `percentual`, highest first.
pub fn is_ranked(combinations: &[SymptomCombination]) -> bool {
    combinations
        .windows(2)
        .all(|pair| pair[0].percentual() >= pair[1].percentual())
}

/// Symptoms of the top-ranked combination; empty when there is none.
///
/// The upstream list is expected to be ranked. When it is not, the entry with
/// the highest `percentual` is taken instead of the head of the list.
pub fn top_combination(combinations: Option<&[SymptomCombination]>) -> Vec<String> {
    let Some(list) = combinations.filter(|list| !list.is_empty()) else {
        return Vec::new();
    };
    if is_ranked(list) {
        return list[0].sintomas.clone();
    }
    warn!(
        entries = list.len(),
        "symptom combinations are not ranked by percentual; selecting the maximum"
    );
    // Only the winning index matters, so the entries carry no key.
    argmax(list.iter().map(|combo| ("", combo.percentual())))
        .and_then(|winner| list.get(winner.index))
        .map(|combo| combo.sintomas.clone())
        .unwrap_or_default()
}
