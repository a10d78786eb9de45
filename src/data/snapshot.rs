//! Typed model of the pre-aggregated surveillance snapshots.
//!
//! Every dimension defaults to empty when absent and every metric defaults to
//! `None` when absent, null or malformed. Accessors turn `None` into `0.0`, so
//! arithmetic never sees a missing value.

use std::fmt;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

/// Category key (bracket label, gender, symptom code, municipality code).
pub type CategoryKey = String;

/// Metrics keyed by category, in source insertion order.
pub type MetricBreakdown = IndexMap<CategoryKey, MetricRecord>;

/// Outer category mapped to an inner breakdown (e.g. symptoms per bracket).
pub type NestedBreakdown = IndexMap<CategoryKey, MetricBreakdown>;

/// Selector for one of the numeric metrics carried by a [`MetricRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Casos,
    Obitos,
    Letalidade,
    Percentual,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Casos,
        Metric::Obitos,
        Metric::Letalidade,
        Metric::Percentual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Casos => "casos",
            Metric::Obitos => "obitos",
            Metric::Letalidade => "letalidade",
            Metric::Percentual => "percentual",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate metrics of a single category.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casos: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obitos: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letalidade: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentual: Option<f64>,
    /// Age brackets publish their share under this name instead.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentual_do_total: Option<f64>,
}

impl MetricRecord {
    /// Record carrying only a case count.
    pub fn with_casos(casos: u64) -> Self {
        Self {
            casos: Some(casos),
            ..Self::default()
        }
    }

    /// Record carrying only a percentage.
    pub fn with_percentual(percentual: f64) -> Self {
        Self {
            percentual: Some(percentual),
            ..Self::default()
        }
    }

    /// Value of `metric`, with absent metrics read as zero.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Casos => self.casos.unwrap_or(0) as f64,
            Metric::Obitos => self.obitos.unwrap_or(0) as f64,
            Metric::Letalidade => finite_or_zero(self.letalidade),
            Metric::Percentual => finite_or_zero(self.share()),
        }
    }

    /// `percentual`, or `percentual_do_total` when only that one is usable.
    pub fn share(&self) -> Option<f64> {
        self.percentual
            .filter(|v| v.is_finite())
            .or(self.percentual_do_total)
    }

    pub fn casos(&self) -> u64 {
        self.casos.unwrap_or(0)
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Dataset-wide totals.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct General {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub total_casos: Option<u64>,
    #[serde(default)]
    pub periodo_inicio: Option<String>,
    #[serde(default)]
    pub periodo_fim: Option<String>,
    #[serde(default)]
    pub anos_disponiveis: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub estados_unicos: Option<u64>,
}

/// Case counts per gender within one outer category.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderCounts {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feminino: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masculino: Option<u64>,
}

/// Clinical outcome split for one gender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSplit {
    #[serde(default)]
    pub cura: MetricRecord,
    #[serde(default)]
    pub obito: MetricRecord,
}

/// Gender-level breakdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderDetail {
    /// Bracket -> `{feminino, masculino}` case counts.
    #[serde(default)]
    pub distribuicao_por_faixa: IndexMap<CategoryKey, GenderCounts>,
    /// Gender -> symptom breakdown.
    #[serde(default)]
    pub sintomas_por_genero: NestedBreakdown,
    /// Gender -> outcome split.
    #[serde(default)]
    pub evolucao_por_genero: IndexMap<CategoryKey, OutcomeSplit>,
}

impl GenderDetail {
    pub fn is_empty(&self) -> bool {
        self.distribuicao_por_faixa.is_empty()
            && self.sintomas_por_genero.is_empty()
            && self.evolucao_por_genero.is_empty()
    }
}

/// Top municipalities as parallel code/count arrays.
///
/// Cells are read one by one: a malformed count becomes `None` without
/// failing the rest of the snapshot.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MunicipalityCounts {
    #[serde(default, deserialize_with = "category_codes")]
    pub codigos: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub casos: Vec<Option<u64>>,
}

/// Month-by-month cases with upstream growth percentages.
///
/// Growth entries stay raw: a zero baseline may have produced `NaN`, `null`
/// or a string, and those are filtered later instead of read as zero.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub meses: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub casos: Vec<Option<u64>>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub crescimento_percentual: Vec<Value>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NationalComparison {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentual_do_total: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidencia_por_100k: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidencia_nacional_por_100k: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razao_incidencia: Option<f64>,
}

/// State-level detail for Santa Catarina.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateDetail {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub total_casos: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub municipios_afetados: Option<u64>,
    #[serde(default)]
    pub municipios: MunicipalityCounts,
    #[serde(default)]
    pub analise_temporal: Option<TemporalAnalysis>,
    #[serde(default)]
    pub comparacao_nacional: Option<NationalComparison>,
    #[serde(default)]
    pub criciuma: Option<Value>,
}

impl StateDetail {
    pub fn is_empty(&self) -> bool {
        self.total_casos.is_none()
            && self.municipios.codigos.is_empty()
            && self.analise_temporal.is_none()
    }
}

/// A co-occurring set of symptoms and its prevalence.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomCombination {
    #[serde(default)]
    pub sintomas: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casos: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentual: Option<f64>,
}

impl SymptomCombination {
    pub fn percentual(&self) -> f64 {
        finite_or_zero(self.percentual)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomProfile {
    /// Bracket -> symptom breakdown.
    #[serde(default)]
    pub por_faixa_etaria: NestedBreakdown,
    /// Upstream-ranked combinations, highest `percentual` first.
    #[serde(default)]
    pub combinacoes_mais_comuns: Vec<SymptomCombination>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub gerado_em: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub total_registros: Option<u64>,
}

impl Metadata {
    /// Generation timestamp, when the producer wrote a parseable ISO-8601 value.
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        let raw = self.gerado_em.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}

/// `dengue_advanced_statistics.json`: the multi-dimensional snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvancedSnapshot {
    #[serde(default)]
    pub geral: Option<General>,
    #[serde(default)]
    pub faixa_etaria: MetricBreakdown,
    #[serde(default)]
    pub genero_detalhado: GenderDetail,
    #[serde(default)]
    pub santa_catarina: StateDetail,
    #[serde(default)]
    pub sintomas_por_perfil: SymptomProfile,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Dimensions of the advanced snapshot that a view can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    FaixaEtaria,
    GeneroDetalhado,
    SantaCatarina,
    SintomasPorPerfil,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::FaixaEtaria,
        Dimension::GeneroDetalhado,
        Dimension::SantaCatarina,
        Dimension::SintomasPorPerfil,
    ];
}

impl AdvancedSnapshot {
    /// Whether `dimension` carries any data in this snapshot.
    pub fn has(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::FaixaEtaria => !self.faixa_etaria.is_empty(),
            Dimension::GeneroDetalhado => !self.genero_detalhado.is_empty(),
            Dimension::SantaCatarina => !self.santa_catarina.is_empty(),
            Dimension::SintomasPorPerfil => {
                !self.sintomas_por_perfil.por_faixa_etaria.is_empty()
                    || !self.sintomas_por_perfil.combinacoes_mais_comuns.is_empty()
            }
        }
    }

    /// Dimensions that are populated, in declaration order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.has(*d))
            .collect()
    }

    /// Total case count of the snapshot, when the producer recorded one.
    pub fn national_total(&self) -> Option<u64> {
        self.metadata
            .total_registros
            .or_else(|| self.geral.as_ref().and_then(|g| g.total_casos))
            .filter(|total| *total > 0)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateCounts {
    #[serde(default, deserialize_with = "category_codes")]
    pub uf: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub casos: Vec<Option<u64>>,
    #[serde_as(deserialize_as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub percentual: Vec<Option<f64>>,
}

/// Yearly counts. Years stay raw so that `2024.0` still reads as 2024.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearCounts {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub anos: Vec<Value>,
    #[serde_as(deserialize_as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub casos: Vec<Option<u64>>,
}

impl YearCounts {
    /// Year at `idx` when it is an integral number.
    pub fn year(&self, idx: usize) -> Option<i64> {
        let raw = self.anos.get(idx)?;
        raw.as_i64().or_else(|| {
            raw.as_f64()
                .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
                .map(|v| v as i64)
        })
    }
}

/// Category codes published either as strings or as bare numbers. Entries
/// of any other type become empty codes; a non-array reads as no codes.
fn category_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let Value::Array(items) = raw else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(code) => code,
            Value::Number(code) => code.to_string(),
            _ => String::new(),
        })
        .collect())
}

/// `dengue_statistics.json`: the national overview snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewSnapshot {
    #[serde(default)]
    pub geral: Option<General>,
    #[serde(default)]
    pub por_estado: StateCounts,
    #[serde(default)]
    pub por_ano: YearCounts,
    #[serde(default)]
    pub sintomas: MetricBreakdown,
    #[serde(default)]
    pub metadata: Metadata,
}
