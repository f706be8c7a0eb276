//! Regex patterns for identity-card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lines that can never be a person's name. Checked against the trimmed
    // line before any cleaning.
    pub static ref NAME_EXCLUSIONS: Vec<Regex> = vec![
        Regex::new(r"^[0-9\-\s.]+$").unwrap(),          // digits, hyphens, dots only
        Regex::new(r"^[^a-zA-Z]*$").unwrap(),           // no letters at all
        Regex::new(r"(?i)university|college|school").unwrap(),
        Regex::new(r"(?i)east|west|north|south").unwrap(),
        Regex::new(r"(?i)card|id|identity").unwrap(),
        Regex::new(r"(?i)unique|serial|number").unwrap(),
        Regex::new(r"(?i)valid|expires|issued").unwrap(),
        Regex::new(r"(?i)www\.|http|\.com").unwrap(),
        Regex::new(r"^[A-Z]$").unwrap(),                // single letter
    ];

    // Line cleaning for the name scan
    pub static ref PUNCTUATION: Regex =
        Regex::new(r#"[%$#@!*(){}\[\]|\\:";'<>?/+=_~`]"#).unwrap();
    pub static ref LABEL_WORDS: Regex =
        Regex::new(r"(?i)\b(?:Name|Student|EWU|ID|Card|Identity|Unique)\b").unwrap();
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Whole-text name fallbacks
    pub static ref CAPITALIZED_RUN: Regex =
        Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+(?:\s+[A-Z][a-z]+)*").unwrap();
    pub static ref NAME_WORD: Regex = Regex::new(r"\b[A-Z][a-z]{1,19}\b").unwrap();

    // ID-number candidates, tried per line in this order
    pub static ref ID_STRICT: Regex =
        Regex::new(r"[0-9]{4}[-.\s]*[0-9][-.\s]*[0-9]{1,3}[-.\s]*[0-9]{3}").unwrap();
    pub static ref ID_LOOSE: Regex =
        Regex::new(r"[0-9]{4}[^a-zA-Z]*[0-9]+[^a-zA-Z]*[0-9]+[^a-zA-Z]*[0-9]+").unwrap();
    pub static ref ID_YEAR_ANCHORED: Regex =
        Regex::new(r"202[0-9][^a-zA-Z]*[0-9]+[^a-zA-Z]*[0-9]+[^a-zA-Z]*[0-9]+").unwrap();
    pub static ref ID_BARE_DIGITS: Regex = Regex::new(r"[0-9]{8,13}").unwrap();

    // Accepted ID shapes
    pub static ref ID_TARGET_SHAPE: Regex =
        Regex::new(r"^20[2-3][0-9]-[0-9]-[0-9]{1,3}-[0-9]{3}$").unwrap();
    pub static ref ID_NORMALIZED_SHAPE: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]-[0-9]{1,3}-[0-9]{3}$").unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
    pub static ref DOT_SPACE_RUNS: Regex = Regex::new(r"[.\s]+").unwrap();
    pub static ref HYPHEN_RUNS: Regex = Regex::new(r"-+").unwrap();

    // Student-card secondary fields
    pub static ref STUDENT_INSTITUTION: Regex = Regex::new(
        r"(?mi)^[ \t]*([A-Za-z&. ]*(?:UNIVERSITY|COLLEGE|INSTITUTE)[A-Za-z&. ]*?)[ \t]*$"
    )
    .unwrap();
    pub static ref STUDENT_DEPARTMENT: Regex =
        Regex::new(r"(?i)DEPARTMENT[:\s]+([A-Za-z &.-]+?)\s*(?:\n|SESSION|VALID|$)").unwrap();
    pub static ref STUDENT_SESSION: Regex =
        Regex::new(r"(?i)SESSION[:\s]+([A-Za-z0-9 -]+?)\s*(?:\n|VALID|$)").unwrap();

    // National-ID secondary fields
    pub static ref NID_NUMBER: Regex =
        Regex::new(r"(?i)(?:NID\s*NO?\.?|NATIONAL\s*ID)[:\s]*([0-9]+)").unwrap();
    pub static ref NID_DATE_OF_BIRTH: Regex =
        Regex::new(r"(?i)(?:DATE\s*OF\s*BIRTH|DOB)[:\s]*([0-9]+\s*[A-Za-z]+\s*[0-9]+)").unwrap();
    pub static ref NID_FATHER: Regex =
        Regex::new(r"(?i)FATHER[:\s]+([A-Za-z .]+?)\s*(?:\n|MOTHER|$)").unwrap();
    pub static ref NID_MOTHER: Regex =
        Regex::new(r"(?i)MOTHER[:\s]+([A-Za-z .]+?)\s*(?:\n|DATE|BLOOD|$)").unwrap();
    pub static ref NID_BLOOD_GROUP: Regex =
        Regex::new(r"(?i)BLOOD\s*GROUP[:\s]*([ABO+-]+)").unwrap();

    // Company-card secondary fields
    pub static ref COMPANY_EMPLOYEE_ID: Regex =
        Regex::new(r"(?i)(?:EMPLOYEE\s*ID|EMP)\b[:\s]*([A-Za-z0-9-]+)").unwrap();
    pub static ref COMPANY_NAME: Regex =
        Regex::new(r"(?m)^[ \t]*([A-Z][A-Z &.]+?)[ \t]*(?:\n|EMPLOYEE|IDENTIFICATION)").unwrap();
    pub static ref COMPANY_DEPARTMENT: Regex =
        Regex::new(r"(?i)DEPARTMENT[:\s]+([A-Za-z &.-]+?)\s*(?:\n|DESIGNATION|VALID|$)").unwrap();
    pub static ref COMPANY_DESIGNATION: Regex =
        Regex::new(r"(?i)DESIGNATION[:\s]+([A-Za-z &.-]+?)\s*(?:\n|JOIN|VALID|$)").unwrap();
    pub static ref COMPANY_JOIN_DATE: Regex =
        Regex::new(r"(?i)JOIN\s*DATE[:\s]*([0-9]+\s*[A-Za-z]+\s*[0-9]+)").unwrap();

    // Captured-value cleanup
    pub static ref FIELD_NOISE: Regex = Regex::new(r"[^\w\s&.-]").unwrap();
}
