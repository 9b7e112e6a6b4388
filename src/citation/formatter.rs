//! Rendering bibliographic records into citation styles.
//!
//! Each style is a pure function from a record to a string. Author lists go
//! through one shared joiner configured per style, and every optional field
//! is rendered only when non-empty, so no style ever emits an empty
//! placeholder or a dangling separator.

use std::fmt;

use tracing::trace;

use super::record::{BibliographicRecord, normalize_doi};
use super::style::CitationStyle;

/// Placeholder for a record with no year text.
const NO_DATE: &str = "n.d.";

/// Resolver prefix for DOI links.
const DOI_RESOLVER: &str = "https://doi.org/";

/// A formatted citation together with the style that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCitation {
    /// Style used.
    pub style: CitationStyle,
    /// Rendered citation.
    pub text: String,
}

impl fmt::Display for FormattedCitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// How a style renders its author list.
struct AuthorRule {
    /// Separator between listed names other than the last.
    separator: &'static str,
    /// Separator before the last listed name.
    last_separator: &'static str,
    /// Appended to the first name when the list is truncated.
    et_al: &'static str,
    /// Longest list rendered in full.
    max_listed: usize,
}

const APA_AUTHORS: AuthorRule = AuthorRule {
    separator: ", ",
    last_separator: " & ",
    et_al: " et al.",
    max_listed: 2,
};

const MLA_AUTHORS: AuthorRule = AuthorRule {
    separator: ", ",
    last_separator: ", and ",
    et_al: ", et al.",
    max_listed: 2,
};

const CHICAGO_AUTHORS: AuthorRule = AuthorRule {
    separator: ", ",
    last_separator: ", ",
    et_al: "",
    max_listed: usize::MAX,
};

const IEEE_AUTHORS: AuthorRule = AuthorRule {
    separator: ", ",
    last_separator: ", ",
    et_al: " et al.",
    max_listed: 3,
};

const HARVARD_AUTHORS: AuthorRule = AuthorRule {
    separator: ", ",
    last_separator: " and ",
    et_al: " et al.",
    max_listed: 2,
};

/// Formats a record in the given style.
///
/// Never fails: missing optional fields are omitted, an empty author list
/// renders as an empty author clause and an empty year as `n.d.`.
///
/// # Example
///
/// ```
/// use citation_core::{BibliographicRecord, CitationStyle, format_citation};
///
/// let record = BibliographicRecord::new(["Smith, J.", "Jones, K."], 2023, "Deep Learning")
///     .with_journal("Nature")
///     .with_volume("12")
///     .with_issue("3")
///     .with_pages("1-10");
///
/// assert_eq!(
///     format_citation(&record, CitationStyle::Apa7),
///     "Smith, J. & Jones, K. (2023). Deep Learning. Nature, 12(3), 1-10."
/// );
/// ```
#[must_use]
pub fn format_citation(record: &BibliographicRecord, style: CitationStyle) -> String {
    let text = match style {
        CitationStyle::Apa7 => format_apa(record),
        CitationStyle::Mla9 => format_mla(record),
        CitationStyle::Chicago17 => format_chicago(record),
        CitationStyle::Ieee => format_ieee(record),
        CitationStyle::Harvard => format_harvard(record),
    };
    trace!(style = style.tag(), citation = %text, "Formatted citation");
    text
}

/// Formats a record and keeps the style tag alongside the text.
#[must_use]
pub fn format_record(record: &BibliographicRecord, style: CitationStyle) -> FormattedCitation {
    FormattedCitation {
        style,
        text: format_citation(record, style),
    }
}

/// Formats a record with a free-form style tag.
///
/// Unknown tags fall back to APA 7th (see [`CitationStyle::from_tag_lenient`]).
#[must_use]
pub fn format_with_tag(record: &BibliographicRecord, tag: &str) -> String {
    format_citation(record, CitationStyle::from_tag_lenient(tag))
}

// APA 7: Authors (Year). Title. Journal, Volume(Issue), Pages. https://doi.org/DOI
fn format_apa(record: &BibliographicRecord) -> String {
    let mut out = String::new();
    push_clause(&mut out, &join_authors(&record.authors, &APA_AUTHORS, str::to_string));
    push_clause(&mut out, &format!("({}).", year_text(record)));
    push_clause(&mut out, &terminated(&record.title));

    let volume_issue = match (non_empty(&record.volume), non_empty(&record.issue)) {
        (Some(volume), Some(issue)) => format!("{volume}({issue})"),
        (Some(volume), None) => volume.to_string(),
        (None, Some(issue)) => format!("({issue})"),
        (None, None) => String::new(),
    };
    let source = join_non_empty(
        &[record.journal.trim(), volume_issue.as_str(), record.pages.trim()],
        ", ",
    );
    push_clause(&mut out, &terminated(&source));
    push_clause(&mut out, &doi_link(&record.doi));
    out
}

// MLA 9: Authors. "Title." Journal, vol. Volume, no. Issue, Year, pp. Pages.
fn format_mla(record: &BibliographicRecord) -> String {
    let mut out = String::new();
    push_clause(
        &mut out,
        &terminated(&join_authors(&record.authors, &MLA_AUTHORS, str::to_string)),
    );
    push_clause(&mut out, &quoted(&terminated(&record.title), '"'));

    let volume = labelled("vol.", &record.volume);
    let issue = labelled("no.", &record.issue);
    let pages = labelled("pp.", &record.pages);
    let source = join_non_empty(
        &[
            record.journal.trim(),
            volume.as_str(),
            issue.as_str(),
            year_text(record),
            pages.as_str(),
        ],
        ", ",
    );
    push_clause(&mut out, &terminated(&source));
    out
}

// Chicago 17: Authors. "Title." Journal Volume, no. Issue (Year): Pages. https://doi.org/DOI
fn format_chicago(record: &BibliographicRecord) -> String {
    let mut out = String::new();
    push_clause(
        &mut out,
        &terminated(&join_authors(
            &record.authors,
            &CHICAGO_AUTHORS,
            str::to_string,
        )),
    );
    push_clause(&mut out, &quoted(&terminated(&record.title), '"'));

    let mut source = join_non_empty(&[record.journal.trim(), record.volume.trim()], " ");
    if let Some(issue) = non_empty(&record.issue) {
        if !source.is_empty() {
            source.push(',');
        }
        push_clause(&mut source, &format!("no. {issue}"));
    }
    push_clause(&mut source, &format!("({})", year_text(record)));
    if let Some(pages) = non_empty(&record.pages) {
        source.push_str(": ");
        source.push_str(pages);
    }
    push_clause(&mut out, &terminated(&source));
    push_clause(&mut out, &doi_link(&record.doi));
    out
}

// IEEE: Authors, "Title," Journal, vol. Volume, no. Issue, pp. Pages, Year.
fn format_ieee(record: &BibliographicRecord) -> String {
    let mut out = String::new();
    let authors = join_authors(&record.authors, &IEEE_AUTHORS, ieee_name);
    if !authors.is_empty() {
        push_clause(&mut out, &format!("{authors},"));
    }

    let title = record.title.trim();
    if !title.is_empty() {
        let title = if ends_with_terminal(title) {
            title.to_string()
        } else {
            format!("{title},")
        };
        push_clause(&mut out, &quoted(&title, '"'));
    }

    let volume = labelled("vol.", &record.volume);
    let issue = labelled("no.", &record.issue);
    let pages = labelled("pp.", &record.pages);
    let source = join_non_empty(
        &[
            record.journal.trim(),
            volume.as_str(),
            issue.as_str(),
            pages.as_str(),
            year_text(record),
        ],
        ", ",
    );
    push_clause(&mut out, &terminated(&source));
    out
}

// Harvard: Authors Year, 'Title', Journal, vol. Volume, no. Issue, pp. Pages.
fn format_harvard(record: &BibliographicRecord) -> String {
    let authors = join_authors(&record.authors, &HARVARD_AUTHORS, str::to_string);
    let head = join_non_empty(&[authors.as_str(), year_text(record)], " ");
    let title = non_empty(&record.title)
        .map(|title| quoted(title, '\''))
        .unwrap_or_default();

    let volume = labelled("vol.", &record.volume);
    let issue = labelled("no.", &record.issue);
    let pages = labelled("pp.", &record.pages);
    terminated(&join_non_empty(
        &[
            head.as_str(),
            title.as_str(),
            record.journal.trim(),
            volume.as_str(),
            issue.as_str(),
            pages.as_str(),
        ],
        ", ",
    ))
}

/// Joins author names under a style's truncation and separator rules.
fn join_authors(
    authors: &[String],
    rule: &AuthorRule,
    transform: impl Fn(&str) -> String,
) -> String {
    let names: Vec<String> = authors
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(transform)
        .collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, ..] if names.len() > rule.max_listed => format!("{first}{}", rule.et_al),
        [head @ .., last] => format!("{}{}{last}", head.join(rule.separator), rule.last_separator),
    }
}

/// Reduces a name to initials plus surname.
///
/// Every whitespace token but the last becomes an initial, so
/// `John Ronald Smith` becomes `J. R. Smith`. Single-token names are kept.
fn ieee_name(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    let Some(surname) = tokens.pop() else {
        return String::new();
    };
    if tokens.is_empty() {
        return surname.to_string();
    }

    let initials: Vec<String> = tokens
        .iter()
        .filter_map(|token| token.chars().next())
        .map(|initial| format!("{initial}."))
        .collect();
    format!("{} {surname}", initials.join(" "))
}

fn year_text(record: &BibliographicRecord) -> &str {
    non_empty(&record.year).unwrap_or(NO_DATE)
}

fn doi_link(doi: &str) -> String {
    let doi = normalize_doi(doi);
    if doi.is_empty() {
        String::new()
    } else {
        format!("{DOI_RESOLVER}{doi}")
    }
}

fn labelled(label: &str, value: &str) -> String {
    non_empty(value).map_or_else(String::new, |value| format!("{label} {value}"))
}

fn quoted(text: &str, mark: char) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{mark}{text}{mark}")
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Appends a clause, space-separated, skipping empty clauses.
fn push_clause(out: &mut String, clause: &str) {
    if clause.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(clause);
}

/// Ends the text with a period unless it already ends a sentence.
fn terminated(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || ends_with_terminal(trimmed) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

fn ends_with_terminal(text: &str) -> bool {
    text.ends_with(['.', '?', '!'])
}
