//! Citation style tags and lenient tag resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::StyleError;

/// Supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CitationStyle {
    /// APA 7th edition
    #[default]
    #[serde(rename = "APA7")]
    Apa7,
    /// MLA 9th edition
    #[serde(rename = "MLA9")]
    Mla9,
    /// Chicago 17th edition
    #[serde(rename = "Chicago17")]
    Chicago17,
    /// IEEE
    #[serde(rename = "IEEE")]
    Ieee,
    /// Harvard
    #[serde(rename = "Harvard")]
    Harvard,
}

impl CitationStyle {
    /// Every supported style, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Apa7,
        Self::Mla9,
        Self::Chicago17,
        Self::Ieee,
        Self::Harvard,
    ];

    /// Returns the canonical tag (`APA7`, `MLA9`, ...).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Apa7 => "APA7",
            Self::Mla9 => "MLA9",
            Self::Chicago17 => "Chicago17",
            Self::Ieee => "IEEE",
            Self::Harvard => "Harvard",
        }
    }

    /// Returns the human-readable label shown in menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apa7 => "APA 7th",
            Self::Mla9 => "MLA 9th",
            Self::Chicago17 => "Chicago 17th",
            Self::Ieee => "IEEE",
            Self::Harvard => "Harvard",
        }
    }

    /// Resolves a tag, falling back to APA 7th for anything unrecognized.
    ///
    /// Never fails. The fallback is logged at warn level together with the
    /// closest known tag.
    #[must_use]
    pub fn from_tag_lenient(tag: &str) -> Self {
        match tag.parse::<Self>() {
            Ok(style) => style,
            Err(_) => {
                let fallback = Self::default();
                warn!(
                    requested = %tag,
                    suggestion = closest_tag(tag).unwrap_or("none"),
                    fallback = fallback.tag(),
                    "Unknown citation style, using default"
                );
                fallback
            }
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for CitationStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_tag(s);
        let style = match key.as_str() {
            "apa7" | "apa7th" | "apa" => Self::Apa7,
            "mla9" | "mla9th" | "mla" => Self::Mla9,
            "chicago17" | "chicago17th" | "chicago" => Self::Chicago17,
            "ieee" => Self::Ieee,
            "harvard" => Self::Harvard,
            _ => {
                let suggestion = closest_tag(s).map_or_else(
                    || {
                        format!(
                            "Use one of: {}",
                            Self::ALL.map(Self::tag).join(", ")
                        )
                    },
                    |tag| format!("Did you mean '{tag}'?"),
                );
                return Err(StyleError::Unknown {
                    tag: s.to_string(),
                    suggestion,
                });
            }
        };
        debug!(tag = %s, style = style.tag(), "Resolved citation style");
        Ok(style)
    }
}

/// Returns true if the tag names one of the supported styles.
#[must_use]
pub fn is_supported_style(tag: &str) -> bool {
    tag.parse::<CitationStyle>().is_ok()
}

// Lowercase alphanumerics only, so "APA 7th", "apa-7" and "APA7" compare equal.
fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Closest canonical tag by normalized Jaro-Winkler similarity, if any is close.
fn closest_tag(tag: &str) -> Option<&'static str> {
    const MIN_SIMILARITY: f64 = 0.7;

    let key = normalize_tag(tag);
    if key.is_empty() {
        return None;
    }

    CitationStyle::ALL
        .iter()
        .map(|style| {
            let candidate = normalize_tag(style.tag());
            (style.tag(), strsim::jaro_winkler(&key, &candidate))
        })
        .filter(|(_, score)| *score >= MIN_SIMILARITY)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(tag, _)| tag)
}
