//! Person-name extraction from noisy card text.
//!
//! Three strategies run in order; the first hit wins. Tier 1 scans lines
//! against an exclusion vocabulary, tier 2 looks for runs of capitalized
//! words across the whole text, tier 3 harvests any name-looking tokens.

use tracing::debug;

use super::patterns::{CAPITALIZED_RUN, LABEL_WORDS, NAME_EXCLUSIONS, NAME_WORD, PUNCTUATION, WHITESPACE};

/// Uppercase terms that disqualify a tier-1 candidate.
const TECHNICAL_TERMS: [&str; 10] = [
    "EWU", "EAST", "WEST", "UNIVERSITY", "STUDENT", "CARD", "IDENTITY", "UNIQUE", "NUMBER",
    "SERIAL",
];

/// Mixed-case terms that disqualify a tier-2 capitalized run.
const CAPITALIZED_BLOCKLIST: [&str; 7] = [
    "East", "West", "University", "Student", "Card", "Identity", "Unique",
];

/// Words dropped by the tier-3 token harvest.
const HARVEST_STOPLIST: [&str; 12] = [
    "East", "West", "University", "Student", "Card", "Identity", "Unique", "Number", "Serial",
    "Valid", "Expires", "Issued",
];

/// A single name-extraction heuristic.
pub trait NameStrategy: Send + Sync {
    /// Short label for logging.
    fn label(&self) -> &'static str;

    /// Try to extract a name from the text.
    fn extract(&self, text: &str) -> Option<String>;
}

/// Tier 1: per-line candidate scan with exclusion rules.
pub struct LineScan;

impl NameStrategy for LineScan {
    fn label(&self) -> &'static str {
        "line-scan"
    }

    fn extract(&self, text: &str) -> Option<String> {
        for line in text.lines() {
            let line = line.trim();
            if line.len() < 3 {
                continue;
            }
            if NAME_EXCLUSIONS.iter().any(|p| p.is_match(line)) {
                continue;
            }

            let cleaned = PUNCTUATION.replace_all(line, " ");
            let cleaned = LABEL_WORDS.replace_all(&cleaned, " ");
            let cleaned = WHITESPACE.replace_all(&cleaned, " ");
            let cleaned = cleaned.trim();
            if cleaned.len() < 5 {
                continue;
            }

            let tokens: Vec<&str> = cleaned
                .split(' ')
                .filter(|w| {
                    w.len() >= 2 && w.len() <= 20 && w.chars().all(|c| c.is_ascii_alphabetic())
                })
                .collect();
            if tokens.len() < 2 {
                continue;
            }

            let candidate = tokens.join(" ");
            let upper = candidate.to_uppercase();
            if TECHNICAL_TERMS.iter().any(|t| upper.contains(t)) {
                continue;
            }
            if (5..=50).contains(&candidate.len()) {
                return Some(candidate);
            }
        }

        None
    }
}

/// Tier 2: runs of two or more capitalized words anywhere in the text.
pub struct WholeTextScan;

impl NameStrategy for WholeTextScan {
    fn label(&self) -> &'static str {
        "whole-text"
    }

    fn extract(&self, text: &str) -> Option<String> {
        let flattened = text.replace('\n', " ");
        let flattened = WHITESPACE.replace_all(&flattened, " ");

        for m in CAPITALIZED_RUN.find_iter(&flattened) {
            let candidate = m.as_str().trim();
            if CAPITALIZED_BLOCKLIST.iter().any(|t| candidate.contains(t)) {
                continue;
            }
            if (5..=50).contains(&candidate.len()) {
                return Some(candidate.to_string());
            }
        }

        None
    }
}

/// Tier 3: last-resort harvest of any capitalized alphabetic words.
pub struct TokenHarvest;

impl NameStrategy for TokenHarvest {
    fn label(&self) -> &'static str {
        "token-harvest"
    }

    fn extract(&self, text: &str) -> Option<String> {
        let words: Vec<&str> = NAME_WORD
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| !HARVEST_STOPLIST.contains(w))
            .collect();

        if words.len() < 2 {
            return None;
        }
        Some(words[..words.len().min(4)].join(" "))
    }
}

/// Ordered cascade over the three strategies.
pub struct NameExtractor {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(LineScan),
                Box::new(WholeTextScan),
                Box::new(TokenHarvest),
            ],
        }
    }

    /// Run the strategies in order and return the first hit.
    pub fn extract(&self, text: &str) -> Option<String> {
        for strategy in &self.strategies {
            if let Some(name) = strategy.extract(text) {
                debug!("name \"{name}\" found via {} strategy", strategy.label());
                return Some(name);
            }
        }
        None
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_scan_picks_labeled_name() {
        let text = "EAST WEST UNIVERSITY\nName: SHEIKH HOSSAIN\nStudent ID: 2023-1-60-060";
        assert_eq!(
            LineScan.extract(text),
            Some("SHEIKH HOSSAIN".to_string())
        );
    }

    #[test]
    fn line_scan_never_picks_excluded_lines() {
        // Two alphabetic tokens, but the institution vocabulary excludes it.
        assert_eq!(LineScan.extract("EAST WEST UNIVERSITY"), None);
        assert_eq!(LineScan.extract("STUDENT IDENTIFICATION CARD"), None);
        assert_eq!(LineScan.extract("www.example.com"), None);
        assert_eq!(LineScan.extract("2023-1-60-060"), None);
    }

    #[test]
    fn line_scan_strips_labels_and_punctuation() {
        assert_eq!(
            LineScan.extract("Name:: *JOHN* DOE!"),
            Some("JOHN DOE".to_string())
        );
    }

    #[test]
    fn whole_text_scan_recovers_name_from_excluded_line() {
        // "Card Holder" makes tier 1 skip the line; tier 2 still finds the
        // capitalized run.
        let text = "Card Holder: John Smith";
        assert_eq!(LineScan.extract(text), None);
        assert_eq!(
            WholeTextScan.extract(text),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn token_harvest_joins_scattered_words() {
        let text = "Rahim 123\nKarim 456";
        assert_eq!(WholeTextScan.extract(text), None);
        assert_eq!(
            TokenHarvest.extract(text),
            Some("Rahim Karim".to_string())
        );
    }

    #[test]
    fn token_harvest_caps_at_four_words() {
        let text = "Anna Maria Theresa Sofia Isabella";
        assert_eq!(
            TokenHarvest.extract(text),
            Some("Anna Maria Theresa Sofia".to_string())
        );
    }

    #[test]
    fn cascade_returns_none_on_boilerplate() {
        let extractor = NameExtractor::new();
        let text = "EAST WEST UNIVERSITY\nSTUDENT IDENTIFICATION CARD\nwww.ewu.edu";
        assert_eq!(extractor.extract(text), None);
    }
}
