//! Symptom profile view: dominant symptom per bracket and top combination.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    data::{AdvancedSnapshot, Dimension, Metric, NestedBreakdown, SymptomCombination},
    highlights::{
        axis::CanonicalAxis,
        brackets::{best_per_category, resolve_extremes},
        symptoms::{display_label, top_combination},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantSymptom {
    pub sintoma: String,
    pub rotulo: String,
    pub percentual: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymptomProfileHighlights {
    pub faixa_criancas: Option<String>,
    pub faixa_idosos: Option<String>,
    pub sintoma_mais_comum_criancas: Option<String>,
    pub sintoma_mais_comum_idosos: Option<String>,
    pub combinacao_mais_comum: Vec<String>,
    pub combinacao_mais_comum_rotulos: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymptomProfileReport {
    pub dados_disponiveis: bool,
    pub por_faixa_etaria: NestedBreakdown,
    pub combinacoes_mais_comuns: Vec<SymptomCombination>,
    /// Keyed by bracket, canonical brackets first.
    pub sintoma_mais_comum_por_faixa: IndexMap<String, DominantSymptom>,
    pub destaques: SymptomProfileHighlights,
}

pub fn symptom_profile(snapshot: &AdvancedSnapshot) -> SymptomProfileReport {
    let profile = &snapshot.sintomas_por_perfil;
    let axis = CanonicalAxis::age_brackets();
    let brackets = axis.arrange(profile.por_faixa_etaria.keys().map(String::as_str));

    let mut best = best_per_category(&profile.por_faixa_etaria, Metric::Percentual);
    let dominant: IndexMap<String, DominantSymptom> = brackets
        .iter()
        .filter_map(|bracket| {
            best.shift_remove(*bracket).map(|entry| {
                (
                    (*bracket).to_string(),
                    DominantSymptom {
                        rotulo: display_label(&entry.key),
                        sintoma: entry.key,
                        percentual: entry.value,
                    },
                )
            })
        })
        .collect();

    let extremes = resolve_extremes(brackets.iter().copied());
    let dominant_in = |bracket: &Option<String>| {
        bracket
            .as_deref()
            .and_then(|key| dominant.get(key))
            .map(|d| d.sintoma.clone())
    };

    let combination = top_combination(Some(profile.combinacoes_mais_comuns.as_slice()));
    let labels = combination.iter().map(|code| display_label(code)).collect();

    SymptomProfileReport {
        dados_disponiveis: snapshot.has(Dimension::SintomasPorPerfil),
        por_faixa_etaria: profile.por_faixa_etaria.clone(),
        combinacoes_mais_comuns: profile.combinacoes_mais_comuns.clone(),
        destaques: SymptomProfileHighlights {
            sintoma_mais_comum_criancas: dominant_in(&extremes.youngest),
            sintoma_mais_comum_idosos: dominant_in(&extremes.oldest),
            faixa_criancas: extremes.youngest,
            faixa_idosos: extremes.oldest,
            combinacao_mais_comum: combination,
            combinacao_mais_comum_rotulos: labels,
        },
        sintoma_mais_comum_por_faixa: dominant,
    }
}
