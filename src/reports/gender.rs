//! Gender view: where the female and male cohorts diverge the most.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    data::{
        snapshot::{GenderCounts, OutcomeSplit},
        AdvancedSnapshot, Metric, MetricBreakdown, NestedBreakdown,
    },
    highlights::differential::{largest_divergence, CohortPair},
};

pub const FEMALE: &str = "feminino";
pub const MALE: &str = "masculino";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LethalityGap {
    pub feminino: f64,
    pub masculino: f64,
    pub diferenca: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenderHighlights {
    pub faixa_maior_diferenca: Option<String>,
    pub diferenca_faixa: Option<u64>,
    pub sintoma_maior_diferenca: Option<String>,
    pub diferenca_sintoma: Option<f64>,
    pub letalidade: LethalityGap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenderReport {
    pub dados_disponiveis: bool,
    pub distribuicao_por_faixa: IndexMap<String, GenderCounts>,
    pub sintomas_por_genero: NestedBreakdown,
    pub evolucao_por_genero: IndexMap<String, OutcomeSplit>,
    pub destaques: GenderHighlights,
}

pub fn gender(snapshot: &AdvancedSnapshot) -> GenderReport {
    let detail = &snapshot.genero_detalhado;

    // Counts and percentages live in different domains: two separate passes.
    let by_bracket =
        CohortPair::from_gender_counts(&detail.distribuicao_por_faixa).largest_divergence(Metric::Casos);

    let empty = MetricBreakdown::new();
    let symptoms_f = detail.sintomas_por_genero.get(FEMALE).unwrap_or(&empty);
    let symptoms_m = detail.sintomas_por_genero.get(MALE).unwrap_or(&empty);
    let by_symptom = largest_divergence(symptoms_f, symptoms_m, Metric::Percentual);

    let death_share = |cohort: &str| {
        detail
            .evolucao_por_genero
            .get(cohort)
            .map(|split| split.obito.value(Metric::Percentual))
            .unwrap_or(0.0)
    };
    let feminino = death_share(FEMALE);
    let masculino = death_share(MALE);

    GenderReport {
        dados_disponiveis: !detail.is_empty(),
        distribuicao_por_faixa: detail.distribuicao_por_faixa.clone(),
        sintomas_por_genero: detail.sintomas_por_genero.clone(),
        evolucao_por_genero: detail.evolucao_por_genero.clone(),
        destaques: GenderHighlights {
            diferenca_faixa: by_bracket.as_ref().map(|d| d.magnitude as u64),
            faixa_maior_diferenca: by_bracket.map(|d| d.key),
            diferenca_sintoma: by_symptom.as_ref().map(|d| d.magnitude),
            sintoma_maior_diferenca: by_symptom.map(|d| d.key),
            letalidade: LethalityGap {
                feminino,
                masculino,
                diferenca: (feminino - masculino).abs(),
            },
        },
    }
}
