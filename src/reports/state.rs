//! Santa Catarina view: municipalities, monthly growth and national share.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    data::{
        snapshot::{NationalComparison, TemporalAnalysis},
        AdvancedSnapshot,
    },
    highlights::{
        extremum::argmax,
        growth::{peak_period, TemporalSeries},
    },
    reports::names::municipality_name,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MunicipalityView {
    pub codigos: Vec<String>,
    pub nomes: Vec<String>,
    pub casos: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateHighlights {
    pub municipio_mais_casos: Option<String>,
    pub codigo_municipio_mais_casos: Option<String>,
    pub percentual_do_total_nacional: f64,
    pub incidencia_vs_nacional: f64,
    /// Peak month-over-month growth; `0.0` when no month had a defined rate.
    pub maior_crescimento_mensal: f64,
    pub mes_maior_crescimento: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StateReport {
    pub dados_disponiveis: bool,
    pub total_casos: u64,
    pub municipios_afetados: u64,
    pub municipios: MunicipalityView,
    pub analise_temporal: TemporalAnalysis,
    pub comparacao_nacional: NationalComparison,
    pub destaques: StateHighlights,
    pub criciuma: Value,
}

pub fn santa_catarina(snapshot: &AdvancedSnapshot) -> StateReport {
    let state = &snapshot.santa_catarina;
    let codigos = state.municipios.codigos.clone();
    let nomes: Vec<String> = codigos.iter().map(|code| municipality_name(code)).collect();
    let counts = &state.municipios.casos;
    // Malformed counts never win but still chart as zero.
    let top = argmax(
        nomes
            .iter()
            .map(String::as_str)
            .zip(counts.iter().map(|c| c.map_or(f64::NAN, |c| c as f64))),
    )
    .and_then(|winner| {
        codigos
            .get(winner.index)
            .map(|code| (winner.key_owned(), code.clone()))
    });

    let analysis = state.analise_temporal.clone().unwrap_or_default();
    let series = TemporalSeries::from_analysis(&analysis);
    if series.invalid_count() > 0 {
        debug!(
            dropped = series.invalid_count(),
            "ignoring undefined monthly growth entries"
        );
    }
    let peak = peak_period(&series).map(|(month, value)| (month.to_string(), value));

    let comparison = state.comparacao_nacional.clone().unwrap_or_default();
    let total_casos = state.total_casos.unwrap_or(0);

    StateReport {
        dados_disponiveis: !state.is_empty(),
        total_casos,
        municipios_afetados: state.municipios_afetados.unwrap_or(0),
        destaques: StateHighlights {
            municipio_mais_casos: top.as_ref().map(|(name, _)| name.clone()),
            codigo_municipio_mais_casos: top.map(|(_, code)| code),
            percentual_do_total_nacional: national_share(snapshot, &comparison),
            incidencia_vs_nacional: comparison.razao_incidencia.unwrap_or(0.0),
            maior_crescimento_mensal: peak.as_ref().map(|(_, value)| *value).unwrap_or(0.0),
            mes_maior_crescimento: peak.map(|(month, _)| month),
        },
        municipios: MunicipalityView {
            codigos,
            nomes,
            casos: counts.iter().map(|c| c.unwrap_or(0)).collect(),
        },
        analise_temporal: analysis,
        comparacao_nacional: comparison,
        criciuma: state
            .criciuma
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default())),
    }
}

/// State share of national cases. Numerator and denominator both come from
/// this snapshot; the producer's own percentage is the fallback.
pub fn national_share(snapshot: &AdvancedSnapshot, comparison: &NationalComparison) -> f64 {
    match (snapshot.santa_catarina.total_casos, snapshot.national_total()) {
        (Some(state), Some(national)) => state as f64 / national as f64 * 100.0,
        _ => comparison
            .percentual_do_total
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
    }
}
