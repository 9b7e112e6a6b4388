//! CLI entry point for the cite tool.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod app_config;
mod cli;
mod commands;

use app_config::{effective_verbosity, load_default_file_config};
use cli::Cli;

/// Process outcome reported through the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
    Success,
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();
    let loaded_config = load_default_file_config()?;

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > info
    let configured = loaded_config
        .config
        .as_ref()
        .and_then(|config| config.verbosity);
    let default_level = effective_verbosity(cli.verbose, cli.quiet, configured).filter_level();
    init_tracing(default_level);

    debug!(
        ?cli,
        config_loaded = loaded_config.loaded_from_file,
        "CLI arguments parsed"
    );

    let exit = commands::dispatch(&cli, &loaded_config)?;
    Ok(exit.into())
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
