//! National overview views: symptom ranking, states and years.

use serde::Serialize;

use crate::{
    data::{Metric, OverviewSnapshot},
    highlights::{extremum::argmax, symptoms::display_label},
    reports::names::state_name,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomEntry {
    pub codigo: String,
    pub nome: String,
    pub casos: u64,
    pub percentual: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymptomRanking {
    pub dados_disponiveis: bool,
    pub sintomas: Vec<SymptomEntry>,
    pub total_sintomas: usize,
}

/// Symptoms by case count, highest first; ties keep source order.
pub fn symptom_ranking(snapshot: &OverviewSnapshot) -> SymptomRanking {
    let mut sintomas: Vec<SymptomEntry> = snapshot
        .sintomas
        .iter()
        .map(|(code, record)| SymptomEntry {
            codigo: code.clone(),
            nome: display_label(&code.to_uppercase()),
            casos: record.casos(),
            percentual: record.value(Metric::Percentual),
        })
        .collect();
    sintomas.sort_by(|a, b| b.casos.cmp(&a.casos));
    SymptomRanking {
        dados_disponiveis: !sintomas.is_empty(),
        total_sintomas: sintomas.len(),
        sintomas,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateEntry {
    pub codigo: String,
    pub nome: String,
    pub casos: u64,
    pub percentual: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatesHighlights {
    pub estado_mais_casos: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatesReport {
    pub dados_disponiveis: bool,
    pub estados: Vec<StateEntry>,
    pub total_estados: usize,
    pub destaques: StatesHighlights,
}

/// States with their names; missing parallel values read as zero.
pub fn states(snapshot: &OverviewSnapshot) -> StatesReport {
    let counts = &snapshot.por_estado;
    let estados: Vec<StateEntry> = counts
        .uf
        .iter()
        .enumerate()
        .map(|(idx, code)| StateEntry {
            codigo: code.clone(),
            nome: state_name(code),
            casos: counts.casos.get(idx).copied().flatten().unwrap_or(0),
            percentual: counts
                .percentual
                .get(idx)
                .copied()
                .flatten()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
        })
        .collect();
    // Missing or malformed counts chart as zero but never win.
    let estado_mais_casos = argmax(estados.iter().enumerate().map(|(idx, entry)| {
        let cases = counts.casos.get(idx).copied().flatten();
        (entry.nome.as_str(), cases.map_or(f64::NAN, |c| c as f64))
    }))
    .map(|winner| winner.key_owned());
    StatesReport {
        dados_disponiveis: !estados.is_empty(),
        total_estados: estados.len(),
        estados,
        destaques: StatesHighlights { estado_mais_casos },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearsHighlights {
    pub ano_mais_casos: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearsReport {
    pub dados_disponiveis: bool,
    pub anos: Vec<i64>,
    pub casos: Vec<u64>,
    pub total_anos: usize,
    pub destaques: YearsHighlights,
}

/// Yearly cases in chronological order. Entries whose year or count is
/// missing or malformed are dropped.
pub fn years(snapshot: &OverviewSnapshot) -> YearsReport {
    let counts = &snapshot.por_ano;
    let mut pairs: Vec<(i64, u64)> = counts
        .casos
        .iter()
        .enumerate()
        .filter_map(|(idx, cases)| Some((counts.year(idx)?, (*cases)?)))
        .collect();
    pairs.sort_by_key(|(year, _)| *year);

    let labels: Vec<String> = pairs.iter().map(|(year, _)| year.to_string()).collect();
    let ano_mais_casos = argmax(
        labels
            .iter()
            .map(String::as_str)
            .zip(pairs.iter().map(|(_, cases)| *cases as f64)),
    )
    .and_then(|winner| pairs.get(winner.index).map(|(year, _)| *year));

    let (anos, casos): (Vec<i64>, Vec<u64>) = pairs.into_iter().unzip();
    YearsReport {
        dados_disponiveis: !anos.is_empty(),
        total_anos: anos.len(),
        anos,
        casos,
        destaques: YearsHighlights { ano_mais_casos },
    }
}
