//! Rule-based classifier: ordered substring matching over a `KeywordSet`.

use super::{Classification, KeywordSet, RiskClassifier, RiskTier};

/// Classifies text by the first keyword it contains, High tier first.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    keywords: KeywordSet,
}

impl KeywordClassifier {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }
}

impl RiskClassifier for KeywordClassifier {
    fn classify(&self, text: Option<&str>) -> Classification {
        let text = text.unwrap_or_default().to_lowercase();
        let text = text.trim();

        let tiers = [
            (RiskTier::High, self.keywords.high()),
            (RiskTier::Medium, self.keywords.medium()),
        ];

        for (tier, keywords) in tiers {
            if let Some(keyword) = first_match(text, keywords) {
                return Classification::new(tier, Some(keyword.to_string()));
            }
        }

        Classification::safe()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

fn first_match<'a>(text: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| text.contains(keyword))
}
