//! Canonical keyword lists.
//!
//! Keywords are lowercase substrings. Order within a list is significant: the
//! first keyword found in the text decides the match. High is always checked
//! before Medium. Hindi/Hinglish entries are literal strings, not translations
//! produced at runtime.

/// Version label of the built-in keyword set. Bump when either list changes.
pub const KEYWORD_SET_VERSION: &str = "2024.1";

/// Keywords that indicate a High risk symptom.
pub const HIGH_KEYWORDS: &[&str] = &[
    "bleeding",
    "blood",
    "no movement",
    "movement nahi",
    "severe pain",
    "contraction",
    "water break",
    "high fever",
];

/// Keywords that indicate a Medium risk symptom.
pub const MEDIUM_KEYWORDS: &[&str] = &[
    "dizziness",
    "chakkar",
    "vomiting",
    "ulti",
    "headache",
    "swelling",
    "nausea",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeywordSetError {
    #[error("{tier} keyword list is empty")]
    EmptyList { tier: &'static str },
    #[error("{tier} keyword list contains a blank entry at position {index}")]
    BlankKeyword { tier: &'static str, index: usize },
}

/// Immutable High/Medium keyword lists plus the label they were published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    version: String,
    high: Vec<String>,
    medium: Vec<String>,
}

impl KeywordSet {
    /// Builds a keyword set, lowercasing and trimming every entry.
    ///
    /// A blank keyword would match every input, so it is rejected rather than
    /// silently dropped.
    pub fn new<S: AsRef<str>>(
        version: impl Into<String>,
        high: &[S],
        medium: &[S],
    ) -> Result<Self, KeywordSetError> {
        Ok(Self {
            version: version.into(),
            high: normalize_list("high", high)?,
            medium: normalize_list("medium", medium)?,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn high(&self) -> &[String] {
        &self.high
    }

    pub fn medium(&self) -> &[String] {
        &self.medium
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            version: KEYWORD_SET_VERSION.to_string(),
            high: HIGH_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            medium: MEDIUM_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

fn normalize_list<S: AsRef<str>>(
    tier: &'static str,
    keywords: &[S],
) -> Result<Vec<String>, KeywordSetError> {
    if keywords.is_empty() {
        return Err(KeywordSetError::EmptyList { tier });
    }

    keywords
        .iter()
        .enumerate()
        .map(|(index, keyword)| {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                Err(KeywordSetError::BlankKeyword { tier, index })
            } else {
                Ok(keyword)
            }
        })
        .collect()
}
