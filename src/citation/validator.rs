//! Acceptance checks for bibliographic records.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::RecordError;
use super::record::{BibliographicRecord, normalize_doi};

/// Earliest publication year accepted into the pipeline.
pub const MIN_ACCEPTED_YEAR: i32 = 1900;

/// Latest publication year accepted into the pipeline.
pub const MAX_ACCEPTED_YEAR: i32 = 2030;

/// Regex for DOIs of the form `10.NNNN/suffix`.
#[allow(clippy::expect_used)]
static DOI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^10\.\d{4,}/[-._;()/:a-zA-Z0-9]+$").expect("validator DOI regex is valid") // Static pattern, safe to panic
});

/// Outcome of checking one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Failures that keep the record out of a bibliography.
    pub errors: Vec<RecordError>,
    /// Findings worth surfacing that do not reject the record.
    pub advisories: Vec<RecordError>,
}

impl ValidationReport {
    /// Returns true when no blocking errors were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returns true if the record has authors, a title and a year in
/// `MIN_ACCEPTED_YEAR..=MAX_ACCEPTED_YEAR`.
///
/// # Example
///
/// ```
/// use citation_core::{BibliographicRecord, validate_record};
///
/// assert!(validate_record(&BibliographicRecord::new(["Smith, J."], 2023, "Title")));
/// assert!(!validate_record(&BibliographicRecord::new(["Smith, J."], 1800, "Title")));
/// ```
#[must_use]
pub fn validate_record(record: &BibliographicRecord) -> bool {
    check_record(record).is_valid()
}

/// Checks a record and reports every problem found.
#[must_use]
pub fn check_record(record: &BibliographicRecord) -> ValidationReport {
    let mut report = ValidationReport::default();

    if record.authors.iter().all(|author| author.trim().is_empty()) {
        report.errors.push(RecordError::MissingAuthors);
    }

    if let Err(err) = check_year(record) {
        report.errors.push(err);
    }

    if record.title.trim().is_empty() {
        report.errors.push(RecordError::MissingTitle);
    }

    let doi = normalize_doi(&record.doi);
    if !doi.is_empty() && !is_valid_doi(doi) {
        report.advisories.push(RecordError::MalformedDoi {
            doi: doi.to_string(),
        });
    }

    debug!(
        valid = report.is_valid(),
        errors = report.errors.len(),
        advisories = report.advisories.len(),
        "Checked bibliographic record"
    );
    report
}

/// Returns true if the text is a bare DOI in `10.NNNN/suffix` form.
#[must_use]
pub fn is_valid_doi(doi: &str) -> bool {
    DOI_PATTERN.is_match(doi.trim())
}

fn check_year(record: &BibliographicRecord) -> Result<(), RecordError> {
    let year = record.year.trim();
    if year.is_empty() {
        return Err(RecordError::MissingYear);
    }

    let Some(value) = record.year_number() else {
        return Err(RecordError::NonNumericYear {
            year: year.to_string(),
        });
    };

    if !(i64::from(MIN_ACCEPTED_YEAR)..=i64::from(MAX_ACCEPTED_YEAR)).contains(&value) {
        return Err(RecordError::year_out_of_range(value));
    }

    Ok(())
}
