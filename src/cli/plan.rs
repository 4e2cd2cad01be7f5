//! Plan subcommand: preview the variable mapping for the current environment.

use crate::format::{OutputFormat, format_plan};
use crate::plan::plan;
use crate::vars::EnvSnapshot;
use anyhow::Result;
use clap::Args;

/// Arguments for the plan subcommand
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

/// Run the plan command.
pub fn run_plan(args: &PlanArgs, env: &EnvSnapshot) -> Result<()> {
    let plan = plan(env);
    println!("{}", format_plan(&plan, args.format)?);
    Ok(())
}
