//! Apply subcommand: rewrite the configuration document in place.

use crate::format::format_report_json;
use crate::materialize::{DEFAULT_CONFIG_PATH, Materializer};
use crate::vars::EnvSnapshot;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the apply subcommand
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Configuration document to rewrite
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print the rewritten document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    pub json: bool,
}

impl Default for ApplyArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            dry_run: false,
            json: false,
        }
    }
}

/// Run the apply command.
pub fn run_apply(args: &ApplyArgs, env: &EnvSnapshot) -> Result<()> {
    let report = Materializer::new(&args.config)
        .with_dry_run(args.dry_run)
        .run(env)
        .with_context(|| format!("Failed to materialize {}", args.config.display()))?;

    if args.dry_run {
        print!("{}", report.rendered);
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&format_report_json(&report)?)?);
    }

    Ok(())
}
