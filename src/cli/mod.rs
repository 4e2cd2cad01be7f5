//! CLI command definitions for setup-env
//!
//! Running the binary with no arguments is the same as `setup-env apply`.

pub mod apply;
pub mod plan;

use apply::ApplyArgs;
use clap::{Parser, Subcommand};
use plan::PlanArgs;

/// Materialize env.yml from deployment environment variables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr, or filename
    ///
    /// Defaults to stdout, or to stderr when the command itself prints a
    /// document or JSON on stdout.
    #[arg(short, long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite the configuration document (default if no subcommand given)
    Apply(ApplyArgs),

    /// Show which variables feed which fields, without touching the document
    Plan(PlanArgs),
}

impl Cli {
    /// Effective `--log` target.
    pub fn log_target(&self) -> &str {
        if let Some(ref log) = self.log {
            return log;
        }
        match self.command {
            Some(Command::Apply(ref args)) if args.dry_run || args.json => "2",
            Some(Command::Plan(_)) => "2",
            _ => "1",
        }
    }
}
