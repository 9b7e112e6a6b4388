//! `cite format`: render one record from command-line fields.

use anyhow::{Result, bail};
use citation_core::{BibliographicRecord, check_record, format_citation, split_authors};
use tracing::{debug, warn};

use super::{headline, headlines};
use crate::ProcessExit;
use crate::app_config::EffectiveSettings;
use crate::cli::FormatArgs;

pub fn run_format_command(args: &FormatArgs, settings: &EffectiveSettings) -> Result<ProcessExit> {
    let record = record_from_args(args);
    debug!(
        authors = record.authors.len(),
        style = settings.style.tag(),
        "Formatting record from arguments"
    );

    let report = check_record(&record);
    for advisory in &report.advisories {
        warn!(advisory = %headline(advisory), "Record advisory");
    }
    if !report.is_valid() {
        if settings.strict {
            bail!("Record is invalid: {}", headlines(&report.errors));
        }
        warn!(errors = %headlines(&report.errors), "Formatting invalid record");
    }

    println!("{}", format_citation(&record, settings.style));
    Ok(ProcessExit::Success)
}

/// Builds a record; repeated `--author` values come first, then `--authors`.
fn record_from_args(args: &FormatArgs) -> BibliographicRecord {
    let mut authors = args.author.clone();
    if let Some(raw) = args.authors.as_deref() {
        authors.extend(split_authors(raw));
    }

    BibliographicRecord::new(authors, &args.year, args.title.as_str())
        .with_journal(args.journal.clone().unwrap_or_default())
        .with_volume(args.volume.clone().unwrap_or_default())
        .with_issue(args.issue.clone().unwrap_or_default())
        .with_pages(args.pages.clone().unwrap_or_default())
        .with_doi(args.doi.clone().unwrap_or_default())
}
