//! Rule-based field extractors for identity documents.

pub mod company;
pub mod id_number;
pub mod name;
pub mod national;
pub mod patterns;
pub mod student;

pub use id_number::IdNumberExtractor;
pub use name::{NameExtractor, NameStrategy};

use patterns::{FIELD_NOISE, WHITESPACE};

/// Normalize a captured field value: collapse whitespace and strip
/// characters outside letters, digits, space, `&`, `.`, `-`.
pub fn clean_field(value: &str) -> String {
    let collapsed = WHITESPACE.replace_all(value, " ");
    FIELD_NOISE.replace_all(&collapsed, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_field_collapses_and_strips() {
        assert_eq!(
            clean_field("  Computer   Science\tEngineering "),
            "Computer Science Engineering"
        );
        assert_eq!(clean_field("R&D / Operations*"), "R&D  Operations");
        assert_eq!(clean_field("LTD."), "LTD.");
    }
}
