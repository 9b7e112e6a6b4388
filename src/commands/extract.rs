//! `cite extract`: list citation mentions found in text.

use anyhow::Result;
use citation_core::{extract_citations, summarize_mentions};
use tracing::info;

use super::read_input;
use crate::ProcessExit;
use crate::app_config::{EffectiveSettings, OutputFormat};
use crate::cli::ExtractArgs;

pub fn run_extract_command(args: &ExtractArgs, settings: &EffectiveSettings) -> Result<ProcessExit> {
    let text = read_input(args.file.as_deref())?;
    let mentions = extract_citations(&text);
    let summary = summarize_mentions(&mentions);

    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&mentions)?),
        OutputFormat::Text => {
            for (index, mention) in mentions.iter().enumerate() {
                println!("{}. {mention}", index + 1);
            }
            println!("{}", summary.format_message());
        }
    }

    info!(
        in_text = summary.in_text,
        numbered = summary.numbered,
        "Extraction complete"
    );
    Ok(ProcessExit::Success)
}
