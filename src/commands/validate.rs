//! `cite validate`: per-record validation report.

use anyhow::{Context, Result};
use citation_core::{ValidationReport, check_record, parse_records_json};
use serde_json::json;
use tracing::info;

use super::{headline, read_input};
use crate::ProcessExit;
use crate::app_config::{EffectiveSettings, OutputFormat};
use crate::cli::ValidateArgs;

pub fn run_validate_command(args: &ValidateArgs, settings: &EffectiveSettings) -> Result<ProcessExit> {
    let input = read_input(args.file.as_deref())?;
    let records = parse_records_json(&input).context("Failed to decode records for validation")?;
    let reports: Vec<ValidationReport> = records.iter().map(check_record).collect();
    let valid = reports.iter().filter(|report| report.is_valid()).count();

    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports_json(&reports))?),
        OutputFormat::Text => {
            for line in report_lines(&reports) {
                println!("{line}");
            }
            println!("{valid} of {} records valid", reports.len());
        }
    }

    info!(valid, total = reports.len(), "Validation complete");
    if valid == reports.len() {
        Ok(ProcessExit::Success)
    } else {
        Ok(ProcessExit::Failure)
    }
}

fn report_lines(reports: &[ValidationReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, report) in reports.iter().enumerate() {
        let status = if report.is_valid() { "valid" } else { "invalid" };
        lines.push(format!("Record {}: {status}", index + 1));
        for error in &report.errors {
            lines.push(format!("  - {}", headline(error)));
        }
        for advisory in &report.advisories {
            lines.push(format!("  ! {}", headline(advisory)));
        }
    }
    lines
}

fn reports_json(reports: &[ValidationReport]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| {
            json!({
                "record": index + 1,
                "valid": report.is_valid(),
                "errors": report.errors.iter().map(headline).collect::<Vec<_>>(),
                "advisories": report.advisories.iter().map(headline).collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}
