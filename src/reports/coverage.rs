//! Consistency summary of an advanced snapshot: which dimensions are present
//! and how many cases the age brackets account for.

use serde::Serialize;

use crate::{
    data::{AdvancedSnapshot, Dimension, MetricBreakdown},
    highlights::axis::CanonicalAxis,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageReport {
    pub gerado_em: Option<String>,
    pub dimensoes: Vec<Dimension>,
    pub total_geral: Option<u64>,
    pub total_em_faixas: u64,
    /// Share of all cases that landed in an age bracket.
    pub percentual_com_faixa: Option<f64>,
    pub casos_sem_faixa: Option<u64>,
    pub faixas_ausentes: Vec<String>,
    pub faixas_ausentes_sintomas: Vec<String>,
}

pub fn coverage(snapshot: &AdvancedSnapshot) -> CoverageReport {
    let axis = CanonicalAxis::age_brackets();
    let total_em_faixas: u64 = snapshot.faixa_etaria.values().map(|r| r.casos()).sum();
    let total_geral = snapshot.geral.as_ref().and_then(|g| g.total_casos);
    let nonzero_total = total_geral.filter(|total| *total > 0);

    // Only the keys matter for the symptom-profile brackets.
    let symptom_brackets: MetricBreakdown = snapshot
        .sintomas_por_perfil
        .por_faixa_etaria
        .keys()
        .map(|key| (key.clone(), Default::default()))
        .collect();

    CoverageReport {
        gerado_em: snapshot
            .metadata
            .generated_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .or_else(|| snapshot.metadata.gerado_em.clone()),
        dimensoes: snapshot.dimensions(),
        total_geral,
        total_em_faixas,
        percentual_com_faixa: nonzero_total
            .map(|total| total_em_faixas as f64 / total as f64 * 100.0),
        casos_sem_faixa: total_geral.map(|total| total.saturating_sub(total_em_faixas)),
        faixas_ausentes: owned(axis.missing_from(&snapshot.faixa_etaria)),
        faixas_ausentes_sintomas: owned(axis.missing_from(&symptom_brackets)),
    }
}

fn owned(keys: Vec<&str>) -> Vec<String> {
    keys.into_iter().map(str::to_string).collect()
}
