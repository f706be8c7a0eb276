//! ID-number extraction oriented around the `YYYY-L-DD(D)-NNN` academic
//! scheme.
//!
//! Two tiers: a per-line scan over increasingly loose digit patterns, then
//! a whole-text harvest of year-anchored digit runs. Candidates are
//! stripped to digits and re-seated into the canonical shape; failing
//! that, the original separators are normalized to hyphens.

use tracing::debug;

use super::patterns::{
    DIGIT_RUN, DOT_SPACE_RUNS, HYPHEN_RUNS, ID_BARE_DIGITS, ID_LOOSE, ID_NORMALIZED_SHAPE,
    ID_STRICT, ID_TARGET_SHAPE, ID_YEAR_ANCHORED,
};

/// Tiered ID-number extractor.
pub struct IdNumberExtractor;

impl IdNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run both tiers in order and return the first accepted candidate.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.scan_lines(text).or_else(|| self.harvest_digits(text))
    }

    /// Tier 1: try each pattern against each line, strictest first.
    fn scan_lines(&self, text: &str) -> Option<String> {
        let line_patterns = [&*ID_STRICT, &*ID_LOOSE, &*ID_YEAR_ANCHORED, &*ID_BARE_DIGITS];

        for line in text.lines() {
            let line = line.trim();
            for pattern in line_patterns {
                for m in pattern.find_iter(line) {
                    let raw = m.as_str();
                    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

                    if let Some(id) = reseat_digits(&digits) {
                        debug!("accepted re-seated ID candidate {id}");
                        return Some(id);
                    }
                    if let Some(id) = normalize_separators(raw) {
                        debug!("accepted separator-normalized ID candidate {id}");
                        return Some(id);
                    }
                }
            }
        }

        None
    }

    /// Tier 2: collect every digit run in the text and re-seat the
    /// year-anchored ones.
    fn harvest_digits(&self, text: &str) -> Option<String> {
        for m in DIGIT_RUN.find_iter(text) {
            let run = m.as_str();
            if run.len() >= 8 && run.starts_with("202") {
                if let Some(id) = reseat_digits(run) {
                    debug!("accepted harvested ID candidate {id}");
                    return Some(id);
                }
            }
        }

        None
    }
}

impl Default for IdNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-seat a bare 10-12 digit run as `YYYY-L-…-NNN` (year 4, level 1,
/// middle the remainder, serial 3) and accept it only in the canonical
/// shape.
fn reseat_digits(digits: &str) -> Option<String> {
    if !(10..=12).contains(&digits.len()) {
        return None;
    }

    let mid_end = digits.len() - 3;
    let formatted = format!(
        "{}-{}-{}-{}",
        &digits[..4],
        &digits[4..5],
        &digits[5..mid_end],
        &digits[mid_end..]
    );

    ID_TARGET_SHAPE.is_match(&formatted).then_some(formatted)
}

/// Collapse dot/space separator runs to hyphens and accept the result if
/// it already carries the `YYYY-L-DD(D)-NNN` shape.
fn normalize_separators(raw: &str) -> Option<String> {
    let collapsed = DOT_SPACE_RUNS.replace_all(raw, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&collapsed, "-");
    let normalized: String = collapsed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    ID_NORMALIZED_SHAPE.is_match(&normalized).then_some(normalized)
}
