//! Citation extraction, validation and multi-style formatting.
//!
//! This module finds citation mentions in free-form text and renders
//! bibliographic records in five citation styles.
//!
//! # Current Support
//!
//! - Author-year mentions: `(Smith, 2023)`, `(Smith & Jones 2021)`, `Smith (2023)`
//! - Numbered mentions: `[4]`
//! - Styles: APA 7th, MLA 9th, Chicago 17th, IEEE, Harvard
//! - Record validation (required fields, year range, DOI shape)
//! - Sorted bibliography assembly
//!
//! # Example
//!
//! ```
//! use citation_core::citation::{BibliographicRecord, CitationStyle, format_citation};
//!
//! let record = BibliographicRecord::new(["Smith, J.", "Jones, K.", "Lee, R."], 2023, "Title");
//! assert_eq!(format_citation(&record, CitationStyle::Apa7), "Smith, J. et al. (2023). Title.");
//! ```

mod bibliography;
mod error;
mod formatter;
mod mention;
mod record;
mod style;
mod validator;

pub use bibliography::{
    BibliographyOutcome, BibliographySummary, ENTRY_SEPARATOR, RejectedRecord,
    assemble_bibliography, build_bibliography,
};
pub use error::{RecordError, StyleError};
pub use formatter::{FormattedCitation, format_citation, format_record, format_with_tag};
pub use mention::{
    CitationMention, MentionKind, MentionSummary, extract_citations, summarize_mentions,
};
pub use record::{BibliographicRecord, normalize_doi, parse_records_json, split_authors};
pub use style::{CitationStyle, is_supported_style};
pub use validator::{
    MAX_ACCEPTED_YEAR, MIN_ACCEPTED_YEAR, ValidationReport, check_record, is_valid_doi,
    validate_record,
};
