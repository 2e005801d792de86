//! Symptom risk classification.
//!
//! `RiskClassifier` is the single capability the HTTP layer depends on: free text
//! in, a `Classification` out. The only implementation today is the keyword
//! matcher in [`keyword`], which can be swapped for a statistical model without
//! touching the handlers.

pub mod keyword;
pub mod keywords;

use serde::Serialize;

pub use keyword::KeywordClassifier;
pub use keywords::{KeywordSet, KEYWORD_SET_VERSION};

/// Advice returned for `RiskTier::High`
pub const ADVICE_HIGH: &str = "Please consult your doctor immediately.";

/// Advice returned for `RiskTier::Medium`
pub const ADVICE_MEDIUM: &str = "Monitor symptoms. Consult doctor if persists.";

/// Advice returned for `RiskTier::Safe`
pub const ADVICE_SAFE: &str = "Continue regular prenatal care.";

/// Risk tier assigned to a symptom description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    High,
    Medium,
    Safe,
}

impl RiskTier {
    /// Fixed advice text for this tier.
    pub fn advice(self) -> &'static str {
        match self {
            RiskTier::High => ADVICE_HIGH,
            RiskTier::Medium => ADVICE_MEDIUM,
            RiskTier::Safe => ADVICE_SAFE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Safe => "Safe",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one symptom description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub risk: RiskTier,
    /// Keyword that decided the tier; `None` for the Safe fallback.
    pub matched: Option<String>,
}

impl Classification {
    pub fn new(risk: RiskTier, matched: Option<String>) -> Self {
        Self { risk, matched }
    }

    /// The default result when nothing matches.
    pub fn safe() -> Self {
        Self::new(RiskTier::Safe, None)
    }

    pub fn advice(&self) -> &'static str {
        self.risk.advice()
    }
}

/// Maps free text to a risk tier.
///
/// Implementations must be total: every input, including `None` and the empty
/// string, yields a classification.
pub trait RiskClassifier: Send + Sync {
    fn classify(&self, text: Option<&str>) -> Classification;

    /// Short identifier used in startup logs.
    fn name(&self) -> &str;
}
