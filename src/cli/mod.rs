//! Command-line interface wiring for dengue-highlights.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod inspect;
pub mod label;
pub mod report;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Dengue surveillance highlights", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Report(args) => report::run(args, settings).await,
            Commands::Inspect(args) => inspect::run(args, settings).await,
            Commands::Label(args) => label::run(args).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API.
    Serve(serve::Args),
    /// Print one view with its highlights as JSON.
    Report(report::Args),
    /// Summarise which dimensions a snapshot carries.
    Inspect(inspect::Args),
    /// Print display labels for symptom codes.
    Label(label::Args),
}

/// Report views, named after their API routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Age brackets with most affected and most lethal bracket.
    FaixasEtarias,
    /// Female/male divergence by bracket and symptom.
    Genero,
    /// Santa Catarina municipalities and monthly growth.
    SantaCatarina,
    /// Dominant symptom per bracket and top combination.
    SintomasPorPerfil,
    /// Dimension and age bracket coverage of the snapshot.
    Cobertura,
    /// National symptom ranking.
    Sintomas,
    /// Cases per state.
    Estados,
    /// Cases per year.
    Anos,
}

impl View {
    /// Whether the view is built from the national overview snapshot.
    pub fn uses_overview(&self) -> bool {
        matches!(self, Self::Sintomas | Self::Estados | Self::Anos)
    }
}
