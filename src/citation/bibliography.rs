//! Bibliography assembly from formatted citations.
//!
//! [`assemble_bibliography`] is the bare assembler and trusts its input.
//! [`build_bibliography`] runs the whole pipeline: records are validated,
//! rejected ones are reported, and the rest are formatted and assembled.

use tracing::{debug, info};

use super::error::RecordError;
use super::formatter::format_citation;
use super::record::BibliographicRecord;
use super::style::CitationStyle;
use super::validator::check_record;

/// Separator placed between bibliography entries.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// A record left out of the bibliography and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the record in the input.
    pub index: usize,
    /// Title as supplied, for display.
    pub title: String,
    /// Validation failures.
    pub errors: Vec<RecordError>,
}

/// Result of running records through validation and assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibliographyOutcome {
    /// Assembled bibliography text.
    pub bibliography: String,
    /// Number of records formatted.
    pub accepted: usize,
    /// Records skipped by validation.
    pub rejected: Vec<RejectedRecord>,
}

impl BibliographyOutcome {
    /// Returns summary counts for this outcome.
    #[must_use]
    pub fn summary(&self) -> BibliographySummary {
        BibliographySummary {
            total: self.accepted + self.rejected.len(),
            accepted: self.accepted,
            rejected: self.rejected.len(),
        }
    }
}

/// Aggregated counts for a bibliography run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BibliographySummary {
    /// Records supplied.
    pub total: usize,
    /// Records formatted.
    pub accepted: usize,
    /// Records rejected.
    pub rejected: usize,
}

impl BibliographySummary {
    /// Returns the one-line summary shown after assembly.
    #[must_use]
    pub fn format_message(&self) -> String {
        format!(
            "Formatted {} of {} records ({} rejected)",
            self.accepted, self.total, self.rejected
        )
    }
}

/// Formats every record, sorts the strings and joins them with blank lines.
///
/// Input is assumed to be validated already. Sorting is on the rendered
/// text, not on any record field. An empty slice yields an empty string.
///
/// # Example
///
/// ```
/// use citation_core::{BibliographicRecord, CitationStyle, assemble_bibliography};
///
/// let records = vec![
///     BibliographicRecord::new(["Smith, J."], 2021, "Later"),
///     BibliographicRecord::new(["Adams, B."], 2023, "Earlier"),
/// ];
/// let bibliography = assemble_bibliography(&records, CitationStyle::Apa7);
/// assert_eq!(
///     bibliography,
///     "Adams, B. (2023). Earlier.\n\nSmith, J. (2021). Later."
/// );
/// ```
#[tracing::instrument(skip(records), fields(records = records.len(), style = style.tag()))]
#[must_use]
pub fn assemble_bibliography(records: &[BibliographicRecord], style: CitationStyle) -> String {
    let mut entries: Vec<String> = records
        .iter()
        .map(|record| format_citation(record, style))
        .collect();
    entries.sort();

    debug!(entries = entries.len(), "Bibliography assembled");
    entries.join(ENTRY_SEPARATOR)
}

/// Validates, formats and assembles records, skipping invalid ones.
#[tracing::instrument(skip(records), fields(records = records.len(), style = style.tag()))]
#[must_use]
pub fn build_bibliography(records: &[BibliographicRecord], style: CitationStyle) -> BibliographyOutcome {
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let report = check_record(record);
        if report.is_valid() {
            accepted.push(record.clone());
        } else {
            debug!(index, errors = report.errors.len(), "Record rejected by validation");
            rejected.push(RejectedRecord {
                index,
                title: record.title.trim().to_string(),
                errors: report.errors,
            });
        }
    }

    let outcome = BibliographyOutcome {
        bibliography: assemble_bibliography(&accepted, style),
        accepted: accepted.len(),
        rejected,
    };
    info!(
        accepted = outcome.accepted,
        rejected = outcome.rejected.len(),
        "Bibliography built"
    );
    outcome
}
