//! setup-env
//!
//! Rewrites the deployment fields of `env.yml` from `PROD_*` or `STAGING_*`
//! environment variables, selected by `ENV`.

use anyhow::Result;
use clap::Parser;
use setup_env::cli::apply::{ApplyArgs, run_apply};
use setup_env::cli::plan::run_plan;
use setup_env::cli::{Cli, Command};
use setup_env::vars::EnvSnapshot;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber for the `--log` target.
fn init_logging(log: &str, verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    match log {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_target(), cli.verbose)?;

    let env = EnvSnapshot::from_process();

    match cli.command {
        Some(Command::Plan(args)) => run_plan(&args, &env),
        Some(Command::Apply(args)) => run_apply(&args, &env),
        None => run_apply(&ApplyArgs::default(), &env),
    }
}
