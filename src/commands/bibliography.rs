//! `cite bibliography`: validate JSON records and print the sorted bibliography.

use anyhow::{Context, Result, bail};
use citation_core::{build_bibliography, parse_records_json};
use tracing::{info, warn};

use super::{headlines, read_input};
use crate::ProcessExit;
use crate::app_config::EffectiveSettings;
use crate::cli::BibliographyArgs;

pub fn run_bibliography_command(
    args: &BibliographyArgs,
    settings: &EffectiveSettings,
) -> Result<ProcessExit> {
    let input = read_input(args.file.as_deref())?;
    let records = parse_records_json(&input).context("Failed to decode bibliography records")?;
    let outcome = build_bibliography(&records, settings.style);
    let summary = outcome.summary();

    if settings.strict && !outcome.rejected.is_empty() {
        let details = outcome
            .rejected
            .iter()
            .map(|rejected| {
                format!(
                    "  record {} '{}': {}",
                    rejected.index + 1,
                    rejected.title,
                    headlines(&rejected.errors)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "{} of {} records are invalid\n{details}",
            summary.rejected,
            summary.total
        );
    }

    for rejected in &outcome.rejected {
        warn!(
            record = rejected.index + 1,
            title = %rejected.title,
            errors = %headlines(&rejected.errors),
            "Skipping invalid record"
        );
    }

    if !outcome.bibliography.is_empty() {
        println!("{}", outcome.bibliography);
    }
    info!(
        style = settings.style.tag(),
        accepted = summary.accepted,
        rejected = summary.rejected,
        "{}",
        summary.format_message()
    );
    Ok(ProcessExit::Success)
}
