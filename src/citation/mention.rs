//! Citation mention detection in free-form academic text.
//!
//! Two independent passes run over the input: author-year mentions
//! (`(Smith, 2023)`, `Smith (2023)`) and bracketed numeric mentions (`[4]`).
//! Mentions are syntactic only. Nothing here resolves a mention to a work or
//! merges mentions that point at the same work.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Regex for parenthetical author-year mentions like `(Smith & Jones, 2021)`.
#[allow(clippy::expect_used)]
static PARENTHETICAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\p{Lu}[\p{L}\s&,.'\-]*?),?\s*(\d{4})\)")
        .expect("parenthetical citation regex is valid") // Static pattern, safe to panic
});

/// Regex for narrative author-year mentions like `Smith et al. (2020)`.
#[allow(clippy::expect_used)]
static NARRATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\p{Lu}[\p{L}'\-]+(?:\s+et\s+al\.?|\s+(?:and|&)\s+\p{Lu}[\p{L}'\-]+)?)\s+\((\d{4})\)",
    )
    .expect("narrative citation regex is valid") // Static pattern, safe to panic
});

/// Capitalized words that open a narrative match without naming an author.
const NON_AUTHOR_WORDS: &[&str] = &[
    "Table", "Figure", "Fig", "Section", "Eq", "Equation", "Chapter", "Appendix", "Part",
    "Step", "Version", "The", "In", "See", "A", "An", "This", "That", "These", "Those", "Our",
    "Since", "Until", "After", "Before", "From", "By", "For", "Of",
];

/// Words that cannot directly precede an author name in narrative form.
const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "our", "their", "its", "his", "her",
];

/// Regex for numbered mentions like `[12]`.
#[allow(clippy::expect_used)]
static NUMBERED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d+)\]").expect("numbered citation regex is valid") // Static pattern, safe to panic
});

/// Which citation form a mention uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    /// Author-year mention
    InText,
    /// Bracketed reference number
    Numbered,
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InText => write!(f, "in-text"),
            Self::Numbered => write!(f, "numbered"),
        }
    }
}

/// A citation marker found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CitationMention {
    /// Author-year mention. `authors` is the raw matched phrase.
    InText {
        /// Author phrase, not split into names
        authors: String,
        /// Four-digit year
        year: String,
    },
    /// Bracketed numeric mention.
    Numbered {
        /// Reference number, always positive
        number: u32,
    },
}

impl CitationMention {
    /// Returns the mention form.
    #[must_use]
    pub fn kind(&self) -> MentionKind {
        match self {
            Self::InText { .. } => MentionKind::InText,
            Self::Numbered { .. } => MentionKind::Numbered,
        }
    }
}

impl fmt::Display for CitationMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InText { authors, year } => write!(f, "{authors} ({year})"),
            Self::Numbered { number } => write!(f, "Reference [{number}]"),
        }
    }
}

/// Counts of extracted mentions by form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MentionSummary {
    /// Author-year mentions.
    pub in_text: usize,
    /// Numbered mentions.
    pub numbered: usize,
}

impl MentionSummary {
    /// Total mentions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_text + self.numbered
    }

    /// Returns the one-line summary shown after extraction.
    #[must_use]
    pub fn format_message(&self) -> String {
        format!(
            "Found {} citations ({} in-text, {} numbered)",
            self.total(),
            self.in_text,
            self.numbered
        )
    }
}

/// Extracts citation mentions from text.
///
/// Author-year mentions are returned first, then numbered mentions, each in
/// the order they appear. Text without citations yields an empty vector.
///
/// # Example
///
/// ```
/// use citation_core::{CitationMention, extract_citations};
///
/// let mentions = extract_citations(
///     "According to Smith (2023), models improve accuracy. See also [4] for a survey.",
/// );
/// assert_eq!(
///     mentions,
///     vec![
///         CitationMention::InText { authors: "Smith".into(), year: "2023".into() },
///         CitationMention::Numbered { number: 4 },
///     ]
/// );
/// ```
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
#[must_use]
pub fn extract_citations(text: &str) -> Vec<CitationMention> {
    if text.trim().is_empty() {
        debug!("Empty text provided");
        return Vec::new();
    }

    let mut mentions = extract_author_year(text);
    let in_text = mentions.len();
    mentions.extend(extract_numbered(text));

    debug!(
        in_text,
        numbered = mentions.len() - in_text,
        "Citation extraction complete"
    );
    mentions
}

/// Returns per-form counts for a mention list.
#[must_use]
pub fn summarize_mentions(mentions: &[CitationMention]) -> MentionSummary {
    mentions
        .iter()
        .fold(MentionSummary::default(), |mut summary, mention| {
            match mention.kind() {
                MentionKind::InText => summary.in_text += 1,
                MentionKind::Numbered => summary.numbered += 1,
            }
            summary
        })
}

fn extract_author_year(text: &str) -> Vec<CitationMention> {
    let parenthetical = PARENTHETICAL_PATTERN
        .captures_iter(text)
        .filter_map(|cap| author_year_candidate(&cap));
    let narrative = NARRATIVE_PATTERN
        .captures_iter(text)
        .filter_map(|cap| author_year_candidate(&cap))
        .filter(|(start, mention)| {
            let keep = is_narrative_author(text, *start, mention);
            if !keep {
                trace!(start, "skipping narrative candidate without an author");
            }
            keep
        });

    let mut found: Vec<(usize, CitationMention)> = parenthetical.chain(narrative).collect();

    // Stable, so a tie keeps parenthetical before narrative.
    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, mention)| mention).collect()
}

fn author_year_candidate(cap: &regex::Captures<'_>) -> Option<(usize, CitationMention)> {
    let start = cap.get(0)?.start();
    let authors = clean_author_phrase(cap.get(1)?.as_str());
    let year = cap.get(2)?.as_str().to_string();
    trace!(authors = %authors, year = %year, start, "found author-year candidate");
    Some((start, CitationMention::InText { authors, year }))
}

/// Rejects `Table (2020)` and `the Results (2020)` style prose.
fn is_narrative_author(text: &str, start: usize, mention: &CitationMention) -> bool {
    let CitationMention::InText { authors, .. } = mention else {
        return false;
    };
    let first_word = authors.split_whitespace().next().unwrap_or_default();
    if NON_AUTHOR_WORDS.contains(&first_word) {
        return false;
    }

    let previous_word = text[..start]
        .split_whitespace()
        .next_back()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .unwrap_or_default();
    !DETERMINERS.contains(&previous_word.as_str())
}

fn extract_numbered(text: &str) -> Vec<CitationMention> {
    NUMBERED_PATTERN
        .captures_iter(text)
        .filter_map(|cap| {
            let digits = cap.get(1)?.as_str();
            match digits.parse::<u32>() {
                Ok(number) if number > 0 => {
                    trace!(number, "found numbered candidate");
                    Some(CitationMention::Numbered { number })
                }
                _ => {
                    debug!(digits = %digits, "Skipping bracketed number that is not a positive u32");
                    None
                }
            }
        })
        .collect()
}

fn clean_author_phrase(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == ',')
        .to_string()
}
