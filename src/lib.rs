//! Citation Core Library
//!
//! This library provides the deterministic core of a research-document
//! assistant: finding citation mentions in academic text, validating
//! bibliographic records, and rendering them as APA, MLA, Chicago, IEEE or
//! Harvard citations and bibliographies.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`citation`] - Mention extraction, record model, validation, formatting
//!   and bibliography assembly
//!
//! Every function is pure and synchronous; nothing here performs I/O.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod citation;

// Re-export commonly used types
pub use citation::{
    BibliographicRecord, BibliographyOutcome, CitationMention, CitationStyle, FormattedCitation,
    MentionKind, RecordError, StyleError, ValidationReport, assemble_bibliography,
    build_bibliography, check_record, extract_citations, format_citation, format_record,
    format_with_tag, is_supported_style, is_valid_doi, parse_records_json, split_authors,
    summarize_mentions, validate_record,
};
