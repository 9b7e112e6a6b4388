//! Config command handlers: show effective configuration.

use anyhow::Result;

use crate::ProcessExit;
use crate::app_config::{EffectiveSettings, LoadedConfig, effective_verbosity};
use crate::cli::Cli;

pub fn run_config_show_command(cli: &Cli, loaded_config: &LoadedConfig) -> Result<ProcessExit> {
    let file_config = loaded_config.file_config();
    let effective = EffectiveSettings::resolve(&file_config, None, false, false);
    let verbosity = effective_verbosity(cli.verbose, cli.quiet, file_config.verbosity);

    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if loaded_config.loaded_from_file {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );
    println!("style = {}", effective.style.tag());
    println!("output = {}", effective.output.as_str());
    println!("strict = {}", effective.strict);
    println!("verbosity = {}", verbosity.as_str());

    Ok(ProcessExit::Success)
}
