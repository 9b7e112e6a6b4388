//! Error types for citation records and style selection.

use thiserror::Error;

use super::validator::{MAX_ACCEPTED_YEAR, MIN_ACCEPTED_YEAR};

/// Problems found with a bibliographic record.
///
/// Validation failures are collected into a
/// [`ValidationReport`](super::ValidationReport) rather than returned early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No usable author names
    #[error("record has no authors\n  Suggestion: Provide at least one author name")]
    MissingAuthors,

    /// Title is empty or whitespace
    #[error("record has no title\n  Suggestion: Provide the title of the work")]
    MissingTitle,

    /// Year field is empty
    #[error("record has no publication year\n  Suggestion: Provide a four-digit year")]
    MissingYear,

    /// Year field is present but not an integer
    #[error("year '{year}' is not numeric\n  Suggestion: Use a four-digit year such as 2023")]
    NonNumericYear {
        /// The year text as supplied
        year: String,
    },

    /// Year parsed but falls outside the accepted band
    #[error(
        "year {year} is outside the accepted range {min}..={max}\n  Suggestion: Check the publication year"
    )]
    YearOutOfRange {
        /// Parsed year
        year: i64,
        /// Lowest accepted year
        min: i64,
        /// Highest accepted year
        max: i64,
    },

    /// DOI does not look like `10.NNNN/suffix` (advisory only)
    #[error("DOI '{doi}' is not in 10.NNNN/suffix form\n  Suggestion: Copy the DOI from the publisher page")]
    MalformedDoi {
        /// DOI as supplied
        doi: String,
    },

    /// JSON record input could not be decoded
    #[error("invalid record JSON: {reason}\n  Suggestion: {suggestion}")]
    InvalidJson {
        /// Decoder message
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl RecordError {
    /// Creates a `YearOutOfRange` error against the accepted year band.
    #[must_use]
    pub fn year_out_of_range(year: i64) -> Self {
        Self::YearOutOfRange {
            year,
            min: i64::from(MIN_ACCEPTED_YEAR),
            max: i64::from(MAX_ACCEPTED_YEAR),
        }
    }

    /// Creates an `InvalidJson` error from a `serde_json` failure.
    #[must_use]
    pub fn invalid_json(err: &serde_json::Error) -> Self {
        Self::InvalidJson {
            reason: err.to_string(),
            suggestion: "Provide a JSON array of objects with authors, year and title".to_string(),
        }
    }
}

/// Errors from strict citation style parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The tag does not name any supported style
    #[error("unknown citation style '{tag}'\n  Suggestion: {suggestion}")]
    Unknown {
        /// Tag as supplied
        tag: String,
        /// Closest known tag, or the list of tags
        suggestion: String,
    },
}
