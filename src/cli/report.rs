//! CLI entry-point for printing a single view as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    cli::View,
    config::Settings,
    data::{load_advanced, load_overview},
    reports,
};

/// Args for the `report` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// View to render.
    #[arg(value_enum)]
    pub view: View,
    /// Snapshot to read instead of the configured one.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// Print compact JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let value = render(args.view, args.snapshot, &settings)?;
    let body = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{body}");
    Ok(())
}

/// Load the snapshot backing `view` and build its report.
pub fn render(view: View, snapshot: Option<PathBuf>, settings: &Settings) -> Result<Value> {
    let path = snapshot.unwrap_or_else(|| {
        if view.uses_overview() {
            settings.overview_path()
        } else {
            settings.advanced_path()
        }
    });
    info!(?view, path = %path.display(), "rendering report");

    let value = if view.uses_overview() {
        let snapshot = load_overview(&path)?;
        match view {
            View::Sintomas => serde_json::to_value(reports::symptom_ranking(&snapshot)),
            View::Estados => serde_json::to_value(reports::states(&snapshot)),
            _ => serde_json::to_value(reports::years(&snapshot)),
        }
    } else {
        let snapshot = load_advanced(&path)?;
        match view {
            View::FaixasEtarias => serde_json::to_value(reports::age_brackets(&snapshot)),
            View::Genero => serde_json::to_value(reports::gender(&snapshot)),
            View::SantaCatarina => serde_json::to_value(reports::santa_catarina(&snapshot)),
            View::SintomasPorPerfil => serde_json::to_value(reports::symptom_profile(&snapshot)),
            _ => serde_json::to_value(reports::coverage(&snapshot)),
        }
    };
    value.with_context(|| format!("serialising {view:?} report"))
}
