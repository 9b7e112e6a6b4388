//! Bibliographic record model and form-input helpers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::error::RecordError;

/// Metadata describing a single work.
///
/// `year` keeps the text as supplied. Formatting renders it verbatim and
/// validation decides whether it is a plausible year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BibliographicRecord {
    /// Author names in citation order.
    #[serde(default, deserialize_with = "deserialize_authors")]
    pub authors: Vec<String>,
    /// Publication year as supplied.
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: String,
    /// Title of the work.
    #[serde(default)]
    pub title: String,
    /// Journal or container title.
    #[serde(default)]
    pub journal: String,
    /// Volume number.
    #[serde(default)]
    pub volume: String,
    /// Issue number.
    #[serde(default)]
    pub issue: String,
    /// Page range.
    #[serde(default)]
    pub pages: String,
    /// Digital Object Identifier.
    #[serde(default)]
    pub doi: String,
}

impl BibliographicRecord {
    /// Creates a record with the required fields; optional fields start empty.
    #[must_use]
    pub fn new<I, S>(authors: I, year: impl fmt::Display, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authors: authors.into_iter().map(Into::into).collect(),
            year: year.to_string(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the journal name.
    #[must_use]
    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = journal.into();
        self
    }

    /// Sets the volume.
    #[must_use]
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = volume.into();
        self
    }

    /// Sets the issue.
    #[must_use]
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = issue.into();
        self
    }

    /// Sets the page range.
    #[must_use]
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = pages.into();
        self
    }

    /// Sets the DOI.
    #[must_use]
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = doi.into();
        self
    }

    /// Returns the year as an integer when the year text is numeric.
    #[must_use]
    pub fn year_number(&self) -> Option<i64> {
        self.year.trim().parse::<i64>().ok()
    }
}

/// Splits a delimited author string from form input into ordered names.
///
/// The most specific delimiter present wins: `;`, then `, & `, then ` and `,
/// then ` & `, then a plain comma. Pieces are trimmed and empty pieces dropped.
///
/// # Example
///
/// ```
/// use citation_core::split_authors;
///
/// assert_eq!(split_authors("Smith, J.; Doe, A."), vec!["Smith, J.", "Doe, A."]);
/// assert_eq!(split_authors("Ada Lovelace and Alan Turing"), vec!["Ada Lovelace", "Alan Turing"]);
/// ```
#[must_use]
pub fn split_authors(raw: &str) -> Vec<String> {
    const DELIMITERS: [&str; 5] = [";", ", & ", " and ", " & ", ","];

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let delimiter = DELIMITERS
        .iter()
        .copied()
        .find(|delimiter| trimmed.contains(delimiter));

    let authors: Vec<String> = match delimiter {
        Some(delimiter) => trimmed
            .split(delimiter)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![trimmed.to_string()],
    };

    debug!(
        delimiter = delimiter.unwrap_or("none"),
        author_count = authors.len(),
        "Split author string"
    );
    authors
}

/// Strips resolver URL and `doi:` prefixes, leaving the bare DOI.
#[must_use]
pub fn normalize_doi(input: &str) -> &str {
    let mut doi = input.trim();

    for prefix in [
        "https://doi.org/",
        "http://doi.org/",
        "https://dx.doi.org/",
        "http://dx.doi.org/",
    ] {
        if let Some(stripped) = doi.strip_prefix(prefix) {
            doi = stripped;
            break;
        }
    }

    if doi.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("doi:")) {
        doi = doi[4..].trim_start();
    }

    doi.trim()
}

/// Decodes records from JSON text.
///
/// Accepts either an array of record objects or a single object. Each record
/// may give `authors` as an array or as one delimited string, and `year` as a
/// number or a string.
///
/// # Errors
///
/// Returns [`RecordError::InvalidJson`] when the text is not valid JSON or a
/// field has the wrong shape. Missing fields decode as empty and are left for
/// the validator to reject.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_records_json(input: &str) -> Result<Vec<BibliographicRecord>, RecordError> {
    if input.trim().is_empty() {
        debug!("Empty record input provided");
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| RecordError::invalid_json(&e))?;
    let records = if value.is_array() {
        Vec::<BibliographicRecord>::deserialize(value)
    } else {
        BibliographicRecord::deserialize(value).map(|record| vec![record])
    }
    .map_err(|e| RecordError::invalid_json(&e))?;

    debug!(records = records.len(), "Decoded record JSON");
    Ok(records)
}

fn deserialize_authors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Authors {
        List(Vec<String>),
        Delimited(String),
    }

    Ok(match Authors::deserialize(deserializer)? {
        Authors::List(list) => list
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        Authors::Delimited(raw) => split_authors(&raw),
    })
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Number(year) => year.to_string(),
        Year::Text(text) => text.trim().to_string(),
    })
}
