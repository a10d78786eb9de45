//! CLI entry-point for checking what an advanced snapshot contains.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument, warn};

use crate::{config::Settings, data::load_advanced, reports};

/// Args for the `inspect` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Snapshot to read instead of the configured one.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let path = args.snapshot.unwrap_or_else(|| settings.advanced_path());
    let snapshot = load_advanced(&path)?;
    let summary = reports::coverage(&snapshot);

    info!(
        path = %path.display(),
        generated = summary.gerado_em.as_deref().unwrap_or("unknown"),
        dimensions = ?summary.dimensoes,
        "snapshot loaded"
    );
    match (summary.total_geral, summary.percentual_com_faixa) {
        (Some(total), Some(share)) => info!(
            total,
            in_brackets = summary.total_em_faixas,
            without_bracket = summary.casos_sem_faixa.unwrap_or(0),
            share = %format!("{share:.2}%"),
            "age bracket coverage"
        ),
        _ => warn!(
            in_brackets = summary.total_em_faixas,
            "snapshot has no general total; bracket coverage unknown"
        ),
    }
    if !summary.faixas_ausentes.is_empty() {
        warn!(missing = ?summary.faixas_ausentes, "age brackets absent from faixa_etaria");
    }
    if !summary.faixas_ausentes_sintomas.is_empty() {
        warn!(
            missing = ?summary.faixas_ausentes_sintomas,
            "age brackets absent from sintomas_por_perfil"
        );
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
