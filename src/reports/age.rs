//! Age bracket view: chart columns plus most/least affected brackets.

use serde::Serialize;

use crate::{
    data::{AdvancedSnapshot, Metric},
    highlights::{
        axis::{project, CanonicalAxis},
        brackets::resolve_extremes,
        extremum::{argmax, argmin},
    },
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeBracketHighlights {
    pub faixa_mais_afetada: Option<String>,
    pub faixa_menos_afetada: Option<String>,
    pub faixa_maior_letalidade: Option<String>,
    /// Bracket standing in for children (`0-4`, or the youngest present).
    pub faixa_criancas: Option<String>,
    /// Bracket standing in for the elderly (`60+`, or the oldest present).
    pub faixa_idosos: Option<String>,
    pub total_casos_criancas: u64,
    pub total_casos_idosos: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeBracketReport {
    pub dados_disponiveis: bool,
    pub faixas: Vec<String>,
    pub casos: Vec<u64>,
    pub obitos: Vec<u64>,
    pub letalidade: Vec<f64>,
    pub percentuais: Vec<f64>,
    pub destaques: AgeBracketHighlights,
}

pub fn age_brackets(snapshot: &AdvancedSnapshot) -> AgeBracketReport {
    age_brackets_on(snapshot, &CanonicalAxis::age_brackets())
}

/// Build the age view over an explicit axis.
pub fn age_brackets_on(snapshot: &AdvancedSnapshot, axis: &CanonicalAxis) -> AgeBracketReport {
    let projection = project(&snapshot.faixa_etaria, axis, &Metric::ALL);
    let extremes = resolve_extremes(projection.categories.iter().map(String::as_str));
    let cases_of = |bracket: &Option<String>| {
        bracket
            .as_deref()
            .and_then(|key| snapshot.faixa_etaria.get(key))
            .map(|record| record.casos())
            .unwrap_or(0)
    };

    let destaques = AgeBracketHighlights {
        faixa_mais_afetada: argmax(projection.entries(Metric::Casos)).map(|w| w.key_owned()),
        faixa_menos_afetada: argmin(projection.entries(Metric::Casos)).map(|w| w.key_owned()),
        faixa_maior_letalidade: argmax(projection.entries(Metric::Letalidade))
            .map(|w| w.key_owned()),
        total_casos_criancas: cases_of(&extremes.youngest),
        total_casos_idosos: cases_of(&extremes.oldest),
        faixa_criancas: extremes.youngest,
        faixa_idosos: extremes.oldest,
    };

    AgeBracketReport {
        dados_disponiveis: !projection.is_empty(),
        casos: projection.counts(Metric::Casos),
        obitos: projection.counts(Metric::Obitos),
        letalidade: projection.column(Metric::Letalidade).to_vec(),
        percentuais: projection.column(Metric::Percentual).to_vec(),
        faixas: projection.categories,
        destaques,
    }
}
