//! CLI entry-point for translating symptom codes.

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::highlights::symptoms::display_label;

/// Args for the `label` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Symptom codes, e.g. `mialgia` or `CEFALEIA`.
    #[arg(required = true)]
    pub codes: Vec<String>,
}

pub async fn run(args: Args) -> Result<()> {
    for code in &args.codes {
        println!("{code}\t{}", display_label(code));
    }
    Ok(())
}
