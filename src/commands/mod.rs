//! CLI command handlers.
//!
//! Results go to stdout; diagnostics go through tracing to stderr.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use citation_core::RecordError;

use crate::ProcessExit;
use crate::app_config::{EffectiveSettings, LoadedConfig};
use crate::cli::{Cli, Command, ConfigCommand};

mod bibliography;
mod config;
mod extract;
mod format;
mod styles;
mod validate;

pub use bibliography::run_bibliography_command;
pub use config::run_config_show_command;
pub use extract::run_extract_command;
pub use format::run_format_command;
pub use styles::run_styles_command;
pub use validate::run_validate_command;

/// Runs the selected command and returns the exit outcome.
pub(crate) fn dispatch(cli: &Cli, loaded_config: &LoadedConfig) -> Result<ProcessExit> {
    let file_config = loaded_config.file_config();

    match &cli.command {
        Command::Extract(args) => {
            let settings = EffectiveSettings::resolve(&file_config, None, args.json, false);
            run_extract_command(args, &settings)
        }
        Command::Format(args) => {
            let settings =
                EffectiveSettings::resolve(&file_config, args.style.as_deref(), false, args.strict);
            run_format_command(args, &settings)
        }
        Command::Bibliography(args) => {
            let settings =
                EffectiveSettings::resolve(&file_config, args.style.as_deref(), false, args.strict);
            run_bibliography_command(args, &settings)
        }
        Command::Validate(args) => {
            let settings = EffectiveSettings::resolve(&file_config, None, args.json, false);
            run_validate_command(args, &settings)
        }
        Command::Styles => run_styles_command(),
        Command::Config { command } => match command {
            ConfigCommand::Show => run_config_show_command(cli, loaded_config),
        },
    }
}

/// Reads command input from a file, or from stdin when the path is absent or `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file
        && path != Path::new("-")
    {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()));
    }

    if io::stdin().is_terminal() {
        bail!("No input provided\n  Suggestion: Pass a FILE argument or pipe input via stdin");
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// First line of an error message, without its suggestion.
fn headline(error: &RecordError) -> String {
    error
        .to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn headlines(errors: &[RecordError]) -> String {
    errors.iter().map(headline).collect::<Vec<_>>().join("; ")
}
